//! Birthday Message Handlers

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::application::dto::request::CreateBirthdayMessageRequest;
use crate::application::dto::response::{BirthdayMessageResponse, ScopedListResponse};
use crate::application::services::{
    BirthdayService, BirthdayServiceImpl, CreateBirthdayMessageDto,
};
use crate::presentation::http::extractors::CurrentNetworkContext;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

/// List the birthday messages of the caller's network
pub async fn list_birthday_messages(
    State(state): State<AppState>,
    CurrentNetworkContext(context): CurrentNetworkContext,
) -> Result<Json<ScopedListResponse<BirthdayMessageResponse>>, AppError> {
    let birthday_service =
        BirthdayServiceImpl::new(state.repositories.birthdays.clone(), state.network_scope());

    let messages = birthday_service.list_messages(context.as_ref()).await?;

    Ok(Json(messages.map(BirthdayMessageResponse::from)))
}

/// Create a birthday message in the caller's network
pub async fn create_birthday_message(
    State(state): State<AppState>,
    CurrentNetworkContext(context): CurrentNetworkContext,
    Json(body): Json<CreateBirthdayMessageRequest>,
) -> Result<(StatusCode, Json<BirthdayMessageResponse>), AppError> {
    body.validate().map_err(validation_error)?;

    let birthday_service =
        BirthdayServiceImpl::new(state.repositories.birthdays.clone(), state.network_scope());

    let message = birthday_service
        .create_message(
            context.as_ref(),
            CreateBirthdayMessageDto {
                mensagem: body.mensagem,
                dias_antecedencia: body.dias_antecedencia,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(BirthdayMessageResponse::from(message))))
}
