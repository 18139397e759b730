//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod birthday;
pub mod health;
pub mod network;
pub mod promotion;
pub mod store;
pub mod survey;
