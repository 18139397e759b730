//! Request DTOs
//!
//! Data structures for API request bodies. None of them carries a network:
//! the network of a new row always comes from the caller's profile.

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Create promotion request
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePromotionRequest {
    #[validate(length(min = 3, max = 120, message = "Title must be 3-120 characters"))]
    pub titulo: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub descricao: Option<String>,

    /// Restrict the promotion to one store of the caller's network
    pub loja_id: Option<Uuid>,

    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
}

/// Create birthday message request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBirthdayMessageRequest {
    #[validate(length(min = 1, max = 1000, message = "Message must be 1-1000 characters"))]
    pub mensagem: String,

    #[validate(range(min = 0, max = 30, message = "Lead time must be 0-30 days"))]
    #[serde(default)]
    pub dias_antecedencia: i32,
}
