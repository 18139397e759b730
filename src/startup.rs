//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::services::NetworkScopeService;
use crate::config::Settings;
use crate::domain::{
    BirthdayRepository, PromotionRepository, StoreLookup, StoreRepository, SurveyRepository,
    UserProfileRepository,
};
use crate::infrastructure::database;
use crate::infrastructure::repositories::{
    PgBirthdayRepository, PgPromotionRepository, PgStoreRepository, PgSurveyRepository,
    PgUserProfileRepository,
};
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{cors, logging};

/// Data access handles shared by all handlers.
#[derive(Clone)]
pub struct Repositories {
    pub profiles: Arc<dyn UserProfileRepository>,
    pub stores: Arc<dyn StoreRepository>,
    pub store_lookup: Arc<dyn StoreLookup>,
    pub promotions: Arc<dyn PromotionRepository>,
    pub surveys: Arc<dyn SurveyRepository>,
    pub birthdays: Arc<dyn BirthdayRepository>,
}

impl Repositories {
    /// PostgreSQL-backed repositories sharing one pool.
    pub fn postgres(pool: PgPool) -> Self {
        let stores = Arc::new(PgStoreRepository::new(pool.clone()));

        Self {
            profiles: Arc::new(PgUserProfileRepository::new(pool.clone())),
            stores: stores.clone(),
            store_lookup: stores,
            promotions: Arc::new(PgPromotionRepository::new(pool.clone())),
            surveys: Arc::new(PgSurveyRepository::new(pool.clone())),
            birthdays: Arc::new(PgBirthdayRepository::new(pool)),
        }
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// `None` when running without a database (tests)
    pub db: Option<PgPool>,
    pub repositories: Repositories,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(db: Option<PgPool>, repositories: Repositories, settings: Settings) -> Self {
        Self {
            db,
            repositories,
            settings: Arc::new(settings),
        }
    }

    /// Scope service configured from settings.
    pub fn network_scope(&self) -> NetworkScopeService<dyn StoreLookup> {
        NetworkScopeService::new(self.repositories.store_lookup.clone())
            .with_write_validation(self.settings.scope.validate_on_write)
    }
}

/// Build the full router (routes plus tracing and CORS layers).
pub fn build_router(state: AppState) -> Router {
    let cors_layer = cors::create_cors_layer(&state.settings.cors);

    routes::create_router(state)
        .layer(logging::create_trace_layer())
        .layer(cors_layer)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let db = database::create_pool(&settings.database).await?;
        tracing::info!("Database connection pool created");

        database::run_migrations(&db).await?;
        tracing::info!("Database migrations applied");

        handlers::health::init_server_start();

        let addr: SocketAddr = settings.server_addr().parse()?;
        let state = AppState::new(Some(db.clone()), Repositories::postgres(db), settings);
        let router = build_router(state);

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }
}
