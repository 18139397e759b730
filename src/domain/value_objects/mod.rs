//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! ## Value Objects
//!
//! - **UserNetworkContext**: the network fields of a user profile
//! - **NetworkSource**: which field a network was resolved from
//! - **NetworkResolutionDiagnostics**: how a context resolved, for observability

mod network;

pub use network::*;
