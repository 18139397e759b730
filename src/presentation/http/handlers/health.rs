//! Health Handlers
//!
//! `/health` and `/health/live` answer as long as the process serves
//! requests. `/health/ready` also pings PostgreSQL and answers 503 while the
//! database is unreachable.

use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use once_cell::sync::Lazy;
use serde::Serialize;
use sqlx::PgPool;

use crate::startup::AppState;

static STARTED: Lazy<Instant> = Lazy::new(Instant::now);

/// Pin the uptime origin to application startup.
pub fn init_server_start() {
    Lazy::force(&STARTED);
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Database state as seen by the readiness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseState {
    Up,
    Down,
    /// Router built without a pool
    NotConfigured,
}

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub uptime_seconds: u64,
    pub database: DatabaseState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_latency_ms: Option<u64>,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn liveness() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "alive",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let (database, latency) = match state.db.as_ref() {
        Some(pool) => ping(pool).await,
        None => (DatabaseState::NotConfigured, None),
    };

    let ready = database != DatabaseState::Down;
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ReadinessResponse {
            ready,
            uptime_seconds: STARTED.elapsed().as_secs(),
            database,
            database_latency_ms: latency,
        }),
    )
}

async fn ping(pool: &PgPool) -> (DatabaseState, Option<u64>) {
    let start = Instant::now();

    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => (DatabaseState::Up, Some(start.elapsed().as_millis() as u64)),
        Err(e) => {
            tracing::error!(error = %e, "Readiness check could not reach the database");
            (DatabaseState::Down, None)
        }
    }
}
