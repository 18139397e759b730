//! Response DTOs
//!
//! Data structures for API response bodies.

use chrono::Utc;
use serde::Serialize;

use crate::domain::{BirthdayMessage, Promotion, Store, Survey};

/// Rows of one network. `rede` is `None` when the caller's network could
/// not be resolved, in which case `items` is always empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScopedListResponse<T> {
    pub rede: Option<String>,
    pub total: usize,
    pub items: Vec<T>,
}

impl<T> ScopedListResponse<T> {
    pub fn new(rede: Option<String>, items: Vec<T>) -> Self {
        Self {
            rede,
            total: items.len(),
            items,
        }
    }

    /// Convert every item, keeping the scope.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> ScopedListResponse<U> {
        ScopedListResponse::new(self.rede, self.items.into_iter().map(f).collect())
    }
}

/// Promotion response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromotionResponse {
    pub id: String,
    pub rede: String,
    pub titulo: String,
    pub descricao: Option<String>,
    pub loja_id: Option<String>,
    pub data_inicio: String,
    pub data_fim: String,
    pub ativa: bool,
    /// Active and inside its date window today
    pub em_andamento: bool,
    pub created_at: String,
}

impl From<Promotion> for PromotionResponse {
    fn from(promotion: Promotion) -> Self {
        let em_andamento = promotion.is_running_on(Utc::now().date_naive());

        Self {
            id: promotion.id.to_string(),
            rede: promotion.rede,
            titulo: promotion.titulo,
            descricao: promotion.descricao,
            loja_id: promotion.loja_id.map(|id| id.to_string()),
            data_inicio: promotion.data_inicio.to_string(),
            data_fim: promotion.data_fim.to_string(),
            ativa: promotion.ativa,
            em_andamento,
            created_at: promotion.created_at.to_rfc3339(),
        }
    }
}

/// Store response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreResponse {
    pub id: String,
    pub nome: String,
    pub rede: String,
    pub sub_rede: Option<String>,
}

impl From<Store> for StoreResponse {
    fn from(store: Store) -> Self {
        Self {
            id: store.id.to_string(),
            nome: store.nome,
            rede: store.rede,
            sub_rede: store.sub_rede,
        }
    }
}

/// Survey response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyResponse {
    pub id: String,
    pub rede: String,
    pub titulo: String,
    pub pergunta: String,
    pub ativa: bool,
    pub created_at: String,
}

impl From<Survey> for SurveyResponse {
    fn from(survey: Survey) -> Self {
        Self {
            id: survey.id.to_string(),
            rede: survey.rede,
            titulo: survey.titulo,
            pergunta: survey.pergunta,
            ativa: survey.ativa,
            created_at: survey.created_at.to_rfc3339(),
        }
    }
}

/// Birthday message response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthdayMessageResponse {
    pub id: String,
    pub rede: String,
    pub mensagem: String,
    pub dias_antecedencia: i32,
    pub ativa: bool,
    pub created_at: String,
}

impl From<BirthdayMessage> for BirthdayMessageResponse {
    fn from(message: BirthdayMessage) -> Self {
        Self {
            id: message.id.to_string(),
            rede: message.rede,
            mensagem: message.mensagem,
            dias_antecedencia: message.dias_antecedencia,
            ativa: message.ativa,
            created_at: message.created_at.to_rfc3339(),
        }
    }
}
