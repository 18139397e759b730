//! Promotion Handlers

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::application::dto::request::CreatePromotionRequest;
use crate::application::dto::response::{PromotionResponse, ScopedListResponse};
use crate::application::services::{CreatePromotionDto, PromotionService, PromotionServiceImpl};
use crate::presentation::http::extractors::CurrentNetworkContext;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

fn promotion_service(state: &AppState) -> impl PromotionService {
    PromotionServiceImpl::new(
        state.repositories.promotions.clone(),
        state.repositories.stores.clone(),
        state.network_scope(),
    )
}

/// List the promotions of the caller's network
pub async fn list_promotions(
    State(state): State<AppState>,
    CurrentNetworkContext(context): CurrentNetworkContext,
) -> Result<Json<ScopedListResponse<PromotionResponse>>, AppError> {
    let promotions = promotion_service(&state)
        .list_promotions(context.as_ref())
        .await?;

    Ok(Json(promotions.map(PromotionResponse::from)))
}

/// Create a promotion in the caller's network
pub async fn create_promotion(
    State(state): State<AppState>,
    CurrentNetworkContext(context): CurrentNetworkContext,
    Json(body): Json<CreatePromotionRequest>,
) -> Result<(StatusCode, Json<PromotionResponse>), AppError> {
    body.validate().map_err(validation_error)?;

    let request = CreatePromotionDto {
        titulo: body.titulo,
        descricao: body.descricao,
        loja_id: body.loja_id,
        data_inicio: body.data_inicio,
        data_fim: body.data_fim,
    };

    let promotion = promotion_service(&state)
        .create_promotion(context.as_ref(), request)
        .await?;

    Ok((StatusCode::CREATED, Json(PromotionResponse::from(promotion))))
}
