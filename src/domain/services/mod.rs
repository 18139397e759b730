//! # Domain Services
//!
//! Domain services encapsulate business logic that doesn't naturally
//! belong to a single entity.
//!
//! ## Services
//!
//! - **NetworkResolver**: picks the network that scopes a user's requests,
//!   checks that it exists and classifies resolution failures

mod network_resolver;

pub use network_resolver::*;
