//! Promotion Service
//!
//! Lists and creates promotions inside the caller's network.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use super::network_scope_service::{NetworkScopeService, ScopeError};
use crate::application::dto::response::ScopedListResponse;
use crate::domain::{
    NewPromotion, Promotion, PromotionRepository, StoreLookup, StoreRepository,
    UserNetworkContext,
};
use crate::shared::error::AppError;
use crate::shared::validation::non_blank;

/// Promotion service trait
#[async_trait]
pub trait PromotionService: Send + Sync {
    /// Promotions of the caller's network; empty when it cannot be resolved
    async fn list_promotions(
        &self,
        context: Option<&UserNetworkContext>,
    ) -> Result<ScopedListResponse<Promotion>, PromotionError>;

    /// Create a promotion tagged with the caller's network
    async fn create_promotion(
        &self,
        context: Option<&UserNetworkContext>,
        request: CreatePromotionDto,
    ) -> Result<Promotion, PromotionError>;
}

/// Create promotion request
#[derive(Debug, Clone)]
pub struct CreatePromotionDto {
    pub titulo: String,
    pub descricao: Option<String>,
    pub loja_id: Option<Uuid>,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
}

/// Promotion service errors
#[derive(Debug, thiserror::Error)]
pub enum PromotionError {
    #[error(transparent)]
    Scope(#[from] ScopeError),

    #[error("A data final não pode ser anterior à data inicial")]
    InvalidDateRange,

    #[error("A loja {0} não pertence à rede {1}")]
    StoreNotInNetwork(Uuid, String),

    #[error(transparent)]
    Repository(#[from] AppError),
}

impl From<PromotionError> for AppError {
    fn from(err: PromotionError) -> Self {
        match err {
            PromotionError::Scope(e) => e.into(),
            PromotionError::InvalidDateRange => AppError::Validation(err.to_string()),
            PromotionError::StoreNotInNetwork(..) => AppError::Forbidden(err.to_string()),
            PromotionError::Repository(e) => e,
        }
    }
}

/// PromotionService implementation
pub struct PromotionServiceImpl<P, S, L>
where
    P: PromotionRepository + ?Sized,
    S: StoreRepository + ?Sized,
    L: StoreLookup + ?Sized,
{
    promotion_repo: Arc<P>,
    store_repo: Arc<S>,
    scope: NetworkScopeService<L>,
}

impl<P, S, L> PromotionServiceImpl<P, S, L>
where
    P: PromotionRepository + ?Sized,
    S: StoreRepository + ?Sized,
    L: StoreLookup + ?Sized,
{
    pub fn new(promotion_repo: Arc<P>, store_repo: Arc<S>, scope: NetworkScopeService<L>) -> Self {
        Self {
            promotion_repo,
            store_repo,
            scope,
        }
    }
}

#[async_trait]
impl<P, S, L> PromotionService for PromotionServiceImpl<P, S, L>
where
    P: PromotionRepository + ?Sized,
    S: StoreRepository + ?Sized,
    L: StoreLookup + ?Sized,
{
    async fn list_promotions(
        &self,
        context: Option<&UserNetworkContext>,
    ) -> Result<ScopedListResponse<Promotion>, PromotionError> {
        let Some(network) = self.scope.read_scope(context) else {
            return Ok(ScopedListResponse::new(None, Vec::new()));
        };

        let promotions = self.promotion_repo.list_by_network(&network).await?;
        Ok(ScopedListResponse::new(Some(network), promotions))
    }

    async fn create_promotion(
        &self,
        context: Option<&UserNetworkContext>,
        request: CreatePromotionDto,
    ) -> Result<Promotion, PromotionError> {
        if request.data_fim < request.data_inicio {
            return Err(PromotionError::InvalidDateRange);
        }

        let network = self.scope.write_scope(context).await?;

        if let Some(loja_id) = request.loja_id {
            let stores = self.store_repo.list_by_network(&network).await?;
            if !stores.iter().any(|store| store.id == loja_id) {
                return Err(PromotionError::StoreNotInNetwork(loja_id, network));
            }
        }

        let promotion = self
            .promotion_repo
            .create(NewPromotion {
                rede: network,
                titulo: request.titulo.trim().to_string(),
                descricao: non_blank(request.descricao),
                loja_id: request.loja_id,
                data_inicio: request.data_inicio,
                data_fim: request.data_fim,
            })
            .await?;

        tracing::info!(
            promotion_id = %promotion.id,
            rede = %promotion.rede,
            "Promotion created"
        );

        Ok(promotion)
    }
}
