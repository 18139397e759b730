//! Promotion entity and repository trait.
//!
//! Maps to the `promocoes` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// A promotion broadcast by the network's WhatsApp bot.
///
/// Maps to the `promocoes` table:
/// - id: UUID PRIMARY KEY
/// - rede: TEXT NOT NULL
/// - titulo: TEXT NOT NULL
/// - descricao: TEXT NULL
/// - loja_id: UUID NULL REFERENCES lojas(id)
/// - data_inicio: DATE NOT NULL
/// - data_fim: DATE NOT NULL
/// - ativa: BOOLEAN NOT NULL DEFAULT TRUE
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: Uuid,
    pub rede: String,
    pub titulo: String,
    pub descricao: Option<String>,

    /// Restricts the promotion to one store; `None` means every store.
    pub loja_id: Option<Uuid>,

    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    pub ativa: bool,
    pub created_at: DateTime<Utc>,
}

impl Promotion {
    /// Whether the promotion is active and `date` falls inside its window.
    pub fn is_running_on(&self, date: NaiveDate) -> bool {
        self.ativa && self.data_inicio <= date && date <= self.data_fim
    }
}

/// Fields of a promotion about to be inserted. `rede` is always the
/// resolved network of the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPromotion {
    pub rede: String,
    pub titulo: String,
    pub descricao: Option<String>,
    pub loja_id: Option<Uuid>,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
}

/// Repository trait for Promotion data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PromotionRepository: Send + Sync {
    /// Promotions of a network, newest first.
    async fn list_by_network(&self, rede: &str) -> Result<Vec<Promotion>, AppError>;

    /// Insert a promotion and return the stored row.
    async fn create(&self, promotion: NewPromotion) -> Result<Promotion, AppError>;
}
