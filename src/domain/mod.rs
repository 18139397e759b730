//! # Domain Layer
//!
//! The domain layer contains the core business logic of the marketing
//! dashboard backend. It is independent of any external frameworks or
//! infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Core domain entities (UserProfile, Store, Promotion, etc.)
//! - **value_objects**: Immutable value types (UserNetworkContext, diagnostics)
//! - **services**: Domain services for network resolution
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Pure business logic and domain rules
//! - Repository traits define data access contracts

pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
