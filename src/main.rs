//! # Marketing Admin
//!
//! Entry point of the network-scoped admin API.
//!
//! Initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Database connection pool and migrations
//! - HTTP server

use anyhow::Result;
use tracing::info;

use marketing_admin::config::Settings;
use marketing_admin::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    marketing_admin::telemetry::init_tracing();

    info!("Starting Marketing Admin...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        validate_on_write = settings.scope.validate_on_write,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
