//! Store Handlers

use axum::{extract::State, Json};

use crate::application::dto::response::{ScopedListResponse, StoreResponse};
use crate::application::services::{StoreService, StoreServiceImpl};
use crate::presentation::http::extractors::CurrentNetworkContext;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List the stores of the caller's network
pub async fn list_stores(
    State(state): State<AppState>,
    CurrentNetworkContext(context): CurrentNetworkContext,
) -> Result<Json<ScopedListResponse<StoreResponse>>, AppError> {
    let store_service =
        StoreServiceImpl::new(state.repositories.stores.clone(), state.network_scope());

    let stores = store_service.list_stores(context.as_ref()).await?;

    Ok(Json(stores.map(StoreResponse::from)))
}
