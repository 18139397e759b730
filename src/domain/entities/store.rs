//! Store (loja) entity, repository trait and lookup capability.
//!
//! Maps to the `lojas` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// A physical store belonging to a network.
///
/// Maps to the `lojas` table:
/// - id: UUID PRIMARY KEY
/// - nome: TEXT NOT NULL
/// - rede: TEXT NOT NULL
/// - sub_rede: TEXT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: Uuid,

    /// Display name
    pub nome: String,

    /// Owning network
    pub rede: String,

    /// Optional finer grouping inside the network
    pub sub_rede: Option<String>,

    pub created_at: DateTime<Utc>,
}

/// Repository trait for Store data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// All stores of a network, ordered by name.
    async fn list_by_network(&self, rede: &str) -> Result<Vec<Store>, AppError>;
}

/// Capability used to prove that a network exists.
///
/// A network is considered valid when it owns at least one store.
/// Implementations must report failures as `Err`, never as an empty list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreLookup: Send + Sync {
    /// Identifiers of the stores belonging to `network`.
    async fn list_stores_for_network(&self, network: &str) -> Result<Vec<String>, AppError>;
}
