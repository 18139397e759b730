//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{middleware, routing::get, Router};

use super::handlers;
use crate::presentation::middleware::auth_middleware;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes(state.clone()))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        .with_state(state)
}

/// API v1 routes, all scoped to the authenticated user's network
fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/me/network", get(handlers::network::get_network_diagnostics))
        .route(
            "/promotions",
            get(handlers::promotion::list_promotions).post(handlers::promotion::create_promotion),
        )
        .route("/stores", get(handlers::store::list_stores))
        .route("/surveys", get(handlers::survey::list_surveys))
        .route(
            "/birthdays",
            get(handlers::birthday::list_birthday_messages)
                .post(handlers::birthday::create_birthday_message),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
