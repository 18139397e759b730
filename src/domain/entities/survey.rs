//! Customer survey entity and repository trait.
//!
//! Maps to the `pesquisas` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// A satisfaction survey the bot sends to customers of a network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    pub id: Uuid,
    pub rede: String,
    pub titulo: String,
    pub pergunta: String,
    pub ativa: bool,
    pub created_at: DateTime<Utc>,
}

/// Repository trait for Survey data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SurveyRepository: Send + Sync {
    /// Surveys of a network, newest first.
    async fn list_by_network(&self, rede: &str) -> Result<Vec<Survey>, AppError>;
}
