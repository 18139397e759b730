//! # Marketing Admin Library
//!
//! Backend of a multi-tenant admin for WhatsApp marketing. Every row the
//! admin reads or writes (stores, promotions, surveys, birthday messages)
//! belongs to one network, and a user only ever sees their own network.
//!
//! The user's network is derived from their profile by
//! [`domain::services::NetworkResolver`]: the first non-empty of `rede`,
//! `empresa` and `sub_rede`.
//!
//! ## Architecture
//!
//! - **Domain Layer**: Entities, repository traits and the network resolver
//! - **Application Layer**: Network-scoped services and DTOs
//! - **Infrastructure Layer**: PostgreSQL repositories
//! - **Presentation Layer**: HTTP handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! marketing_admin/
//! +-- config/         Configuration management
//! +-- domain/         Entities, value objects, network resolution
//! +-- application/    Application services and DTOs
//! +-- infrastructure/ Database and repository implementations
//! +-- presentation/   HTTP routes, handlers and middleware
//! +-- shared/         Common utilities (errors, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Logging setup
pub mod telemetry;
