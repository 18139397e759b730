//! Birthday message entity and repository trait.
//!
//! Maps to the `mensagens_aniversario` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// Longest lead time, in days, a birthday message may be scheduled ahead.
pub const MAX_BIRTHDAY_LEAD_DAYS: i32 = 30;

/// Template the bot sends to customers on (or before) their birthday.
///
/// Maps to the `mensagens_aniversario` table:
/// - id: UUID PRIMARY KEY
/// - rede: TEXT NOT NULL
/// - mensagem: TEXT NOT NULL
/// - dias_antecedencia: INTEGER NOT NULL DEFAULT 0
/// - ativa: BOOLEAN NOT NULL DEFAULT TRUE
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthdayMessage {
    pub id: Uuid,
    pub rede: String,
    pub mensagem: String,

    /// Days before the birthday the message goes out (0 = on the day)
    pub dias_antecedencia: i32,

    pub ativa: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields of a birthday message about to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBirthdayMessage {
    pub rede: String,
    pub mensagem: String,
    pub dias_antecedencia: i32,
}

/// Repository trait for BirthdayMessage data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BirthdayRepository: Send + Sync {
    /// Birthday messages of a network, newest first.
    async fn list_by_network(&self, rede: &str) -> Result<Vec<BirthdayMessage>, AppError>;

    /// Insert a birthday message and return the stored row.
    async fn create(&self, message: NewBirthdayMessage) -> Result<BirthdayMessage, AppError>;
}
