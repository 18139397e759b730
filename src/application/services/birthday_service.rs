//! Birthday Message Service
//!
//! Manages the birthday templates the bot sends to a network's customers.

use std::sync::Arc;

use async_trait::async_trait;

use super::network_scope_service::{NetworkScopeService, ScopeError};
use crate::application::dto::response::ScopedListResponse;
use crate::domain::{
    BirthdayMessage, BirthdayRepository, NewBirthdayMessage, StoreLookup, UserNetworkContext,
    MAX_BIRTHDAY_LEAD_DAYS,
};
use crate::shared::error::AppError;

/// Birthday service trait
#[async_trait]
pub trait BirthdayService: Send + Sync {
    async fn list_messages(
        &self,
        context: Option<&UserNetworkContext>,
    ) -> Result<ScopedListResponse<BirthdayMessage>, BirthdayError>;

    async fn create_message(
        &self,
        context: Option<&UserNetworkContext>,
        request: CreateBirthdayMessageDto,
    ) -> Result<BirthdayMessage, BirthdayError>;
}

/// Create birthday message request
#[derive(Debug, Clone)]
pub struct CreateBirthdayMessageDto {
    pub mensagem: String,
    pub dias_antecedencia: i32,
}

/// Birthday service errors
#[derive(Debug, thiserror::Error)]
pub enum BirthdayError {
    #[error(transparent)]
    Scope(#[from] ScopeError),

    #[error("A mensagem não pode ser vazia")]
    EmptyMessage,

    #[error("A antecedência deve estar entre 0 e {} dias", MAX_BIRTHDAY_LEAD_DAYS)]
    InvalidLeadTime,

    #[error(transparent)]
    Repository(#[from] AppError),
}

impl From<BirthdayError> for AppError {
    fn from(err: BirthdayError) -> Self {
        match err {
            BirthdayError::Scope(e) => e.into(),
            BirthdayError::EmptyMessage | BirthdayError::InvalidLeadTime => {
                AppError::Validation(err.to_string())
            }
            BirthdayError::Repository(e) => e,
        }
    }
}

/// BirthdayService implementation
pub struct BirthdayServiceImpl<R, L>
where
    R: BirthdayRepository + ?Sized,
    L: StoreLookup + ?Sized,
{
    birthday_repo: Arc<R>,
    scope: NetworkScopeService<L>,
}

impl<R, L> BirthdayServiceImpl<R, L>
where
    R: BirthdayRepository + ?Sized,
    L: StoreLookup + ?Sized,
{
    pub fn new(birthday_repo: Arc<R>, scope: NetworkScopeService<L>) -> Self {
        Self {
            birthday_repo,
            scope,
        }
    }
}

#[async_trait]
impl<R, L> BirthdayService for BirthdayServiceImpl<R, L>
where
    R: BirthdayRepository + ?Sized,
    L: StoreLookup + ?Sized,
{
    async fn list_messages(
        &self,
        context: Option<&UserNetworkContext>,
    ) -> Result<ScopedListResponse<BirthdayMessage>, BirthdayError> {
        let Some(network) = self.scope.read_scope(context) else {
            return Ok(ScopedListResponse::new(None, Vec::new()));
        };

        let messages = self.birthday_repo.list_by_network(&network).await?;
        Ok(ScopedListResponse::new(Some(network), messages))
    }

    async fn create_message(
        &self,
        context: Option<&UserNetworkContext>,
        request: CreateBirthdayMessageDto,
    ) -> Result<BirthdayMessage, BirthdayError> {
        let mensagem = request.mensagem.trim();
        if mensagem.is_empty() {
            return Err(BirthdayError::EmptyMessage);
        }
        if !(0..=MAX_BIRTHDAY_LEAD_DAYS).contains(&request.dias_antecedencia) {
            return Err(BirthdayError::InvalidLeadTime);
        }

        let network = self.scope.write_scope(context).await?;

        let message = self
            .birthday_repo
            .create(NewBirthdayMessage {
                rede: network,
                mensagem: mensagem.to_string(),
                dias_antecedencia: request.dias_antecedencia,
            })
            .await?;

        tracing::info!(message_id = %message.id, rede = %message.rede, "Birthday message created");

        Ok(message)
    }
}
