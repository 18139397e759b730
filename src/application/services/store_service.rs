//! Store Service

use std::sync::Arc;

use async_trait::async_trait;

use super::network_scope_service::NetworkScopeService;
use crate::application::dto::response::ScopedListResponse;
use crate::domain::{Store, StoreLookup, StoreRepository, UserNetworkContext};
use crate::shared::error::AppError;

/// Store service trait
#[async_trait]
pub trait StoreService: Send + Sync {
    /// Stores of the caller's network; empty when it cannot be resolved
    async fn list_stores(
        &self,
        context: Option<&UserNetworkContext>,
    ) -> Result<ScopedListResponse<Store>, AppError>;
}

/// StoreService implementation
pub struct StoreServiceImpl<S, L>
where
    S: StoreRepository + ?Sized,
    L: StoreLookup + ?Sized,
{
    store_repo: Arc<S>,
    scope: NetworkScopeService<L>,
}

impl<S, L> StoreServiceImpl<S, L>
where
    S: StoreRepository + ?Sized,
    L: StoreLookup + ?Sized,
{
    pub fn new(store_repo: Arc<S>, scope: NetworkScopeService<L>) -> Self {
        Self { store_repo, scope }
    }
}

#[async_trait]
impl<S, L> StoreService for StoreServiceImpl<S, L>
where
    S: StoreRepository + ?Sized,
    L: StoreLookup + ?Sized,
{
    async fn list_stores(
        &self,
        context: Option<&UserNetworkContext>,
    ) -> Result<ScopedListResponse<Store>, AppError> {
        let Some(network) = self.scope.read_scope(context) else {
            return Ok(ScopedListResponse::new(None, Vec::new()));
        };

        let stores = self.store_repo.list_by_network(&network).await?;
        Ok(ScopedListResponse::new(Some(network), stores))
    }
}
