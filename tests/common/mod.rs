//! Common Test Utilities
//!
//! In-memory repositories and a router-backed test application.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response, Router};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use marketing_admin::config::{
    CorsSettings, DatabaseSettings, JwtSettings, ScopeSettings, ServerSettings, Settings,
};
use marketing_admin::domain::{
    BirthdayMessage, BirthdayRepository, NewBirthdayMessage, NewPromotion, Promotion,
    PromotionRepository, Store, StoreLookup, StoreRepository, Survey, SurveyRepository,
    UserProfile, UserProfileRepository,
};
use marketing_admin::presentation::middleware::Claims;
use marketing_admin::shared::error::AppError;
use marketing_admin::startup::{build_router, AppState, Repositories};

pub const TEST_JWT_SECRET: &str = "integration-test-secret-with-32-bytes!!";

/// Settings for a router without a database
pub fn test_settings(validate_on_write: bool) -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
        database: DatabaseSettings {
            url: "postgres://unused".into(),
            max_connections: 1,
            min_connections: 0,
            acquire_timeout: 1,
        },
        jwt: JwtSettings {
            secret: TEST_JWT_SECRET.into(),
        },
        cors: CorsSettings {
            allowed_origins: vec!["http://localhost:5173".into()],
        },
        scope: ScopeSettings { validate_on_write },
        environment: "test".into(),
    }
}

/// Every table of the schema kept in memory.
#[derive(Default)]
pub struct InMemoryDb {
    profiles: Mutex<HashMap<Uuid, UserProfile>>,
    stores: Mutex<Vec<Store>>,
    promotions: Mutex<Vec<Promotion>>,
    surveys: Mutex<Vec<Survey>>,
    birthdays: Mutex<Vec<BirthdayMessage>>,
    lookup_calls: AtomicUsize,
    lookup_fails: AtomicBool,
}

impl InMemoryDb {
    pub fn insert_profile(&self, profile: UserProfile) {
        self.profiles.lock().unwrap().insert(profile.id, profile);
    }

    pub fn insert_store(&self, rede: &str, nome: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.stores.lock().unwrap().push(Store {
            id,
            nome: nome.into(),
            rede: rede.into(),
            sub_rede: None,
            created_at: Utc::now(),
        });
        id
    }

    pub fn insert_survey(&self, rede: &str, titulo: &str) {
        self.surveys.lock().unwrap().push(Survey {
            id: Uuid::new_v4(),
            rede: rede.into(),
            titulo: titulo.into(),
            pergunta: "Como foi seu atendimento?".into(),
            ativa: true,
            created_at: Utc::now(),
        });
    }

    pub fn promotions(&self) -> Vec<Promotion> {
        self.promotions.lock().unwrap().clone()
    }

    pub fn lookup_calls(&self) -> usize {
        self.lookup_calls.load(Ordering::SeqCst)
    }

    /// Make the store lookup fail from now on
    pub fn fail_lookups(&self) {
        self.lookup_fails.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserProfileRepository for InMemoryDb {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserProfile>, AppError> {
        Ok(self.profiles.lock().unwrap().get(&id).cloned())
    }
}

#[async_trait]
impl StoreRepository for InMemoryDb {
    async fn list_by_network(&self, rede: &str) -> Result<Vec<Store>, AppError> {
        let mut stores: Vec<Store> = self
            .stores
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.rede == rede)
            .cloned()
            .collect();
        stores.sort_by(|a, b| a.nome.cmp(&b.nome));
        Ok(stores)
    }
}

#[async_trait]
impl StoreLookup for InMemoryDb {
    async fn list_stores_for_network(&self, network: &str) -> Result<Vec<String>, AppError> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);

        if self.lookup_fails.load(Ordering::SeqCst) {
            return Err(AppError::Internal("store lookup unavailable".into()));
        }

        Ok(self
            .stores
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.rede == network)
            .map(|s| s.id.to_string())
            .collect())
    }
}

#[async_trait]
impl PromotionRepository for InMemoryDb {
    async fn list_by_network(&self, rede: &str) -> Result<Vec<Promotion>, AppError> {
        Ok(self
            .promotions
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.rede == rede)
            .cloned()
            .collect())
    }

    async fn create(&self, promotion: NewPromotion) -> Result<Promotion, AppError> {
        let created = Promotion {
            id: Uuid::new_v4(),
            rede: promotion.rede,
            titulo: promotion.titulo,
            descricao: promotion.descricao,
            loja_id: promotion.loja_id,
            data_inicio: promotion.data_inicio,
            data_fim: promotion.data_fim,
            ativa: true,
            created_at: Utc::now(),
        };
        self.promotions.lock().unwrap().push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl SurveyRepository for InMemoryDb {
    async fn list_by_network(&self, rede: &str) -> Result<Vec<Survey>, AppError> {
        Ok(self
            .surveys
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.rede == rede)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl BirthdayRepository for InMemoryDb {
    async fn list_by_network(&self, rede: &str) -> Result<Vec<BirthdayMessage>, AppError> {
        Ok(self
            .birthdays
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.rede == rede)
            .cloned()
            .collect())
    }

    async fn create(&self, message: NewBirthdayMessage) -> Result<BirthdayMessage, AppError> {
        let created = BirthdayMessage {
            id: Uuid::new_v4(),
            rede: message.rede,
            mensagem: message.mensagem,
            dias_antecedencia: message.dias_antecedencia,
            ativa: true,
            created_at: Utc::now(),
        };
        self.birthdays.lock().unwrap().push(created.clone());
        Ok(created)
    }
}

/// Test application backed by [`InMemoryDb`]
pub struct TestApp {
    pub router: Router,
    pub db: Arc<InMemoryDb>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_write_validation(true)
    }

    pub fn with_write_validation(validate_on_write: bool) -> Self {
        let db = Arc::new(InMemoryDb::default());
        let repositories = Repositories {
            profiles: db.clone(),
            stores: db.clone(),
            store_lookup: db.clone(),
            promotions: db.clone(),
            surveys: db.clone(),
            birthdays: db.clone(),
        };
        let state = AppState::new(None, repositories, test_settings(validate_on_write));

        Self {
            router: build_router(state),
            db,
        }
    }

    /// Insert a profile and return a token for it
    pub fn user(
        &self,
        rede: Option<&str>,
        empresa: Option<&str>,
        sub_rede: Option<&str>,
    ) -> String {
        let id = Uuid::new_v4();
        self.db.insert_profile(UserProfile {
            id,
            email: Some(format!("{}@example.com", id.simple())),
            rede: rede.map(Into::into),
            empresa: empresa.map(Into::into),
            sub_rede: sub_rede.map(Into::into),
        });
        token_for(id)
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> Response {
        self.send(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
            .await
    }

    /// Make an authenticated GET request
    pub async fn get_auth(&self, uri: &str, token: &str) -> Response {
        self.send(
            Request::builder()
                .method("GET")
                .uri(uri)
                .header("Authorization", format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make an authenticated POST request with JSON body
    pub async fn post_json_auth(&self, uri: &str, body: &Value, token: &str) -> Response {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .header("Authorization", format!("Bearer {}", token))
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

/// Session token for a profile id
pub fn token_for(user_id: Uuid) -> String {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::hours(1)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap()
}

/// Read a response body as JSON
pub async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
