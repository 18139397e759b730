//! Survey Handlers

use axum::{extract::State, Json};

use crate::application::dto::response::{ScopedListResponse, SurveyResponse};
use crate::application::services::{SurveyService, SurveyServiceImpl};
use crate::presentation::http::extractors::CurrentNetworkContext;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List the surveys of the caller's network
pub async fn list_surveys(
    State(state): State<AppState>,
    CurrentNetworkContext(context): CurrentNetworkContext,
) -> Result<Json<ScopedListResponse<SurveyResponse>>, AppError> {
    let survey_service =
        SurveyServiceImpl::new(state.repositories.surveys.clone(), state.network_scope());

    let surveys = survey_service.list_surveys(context.as_ref()).await?;

    Ok(Json(surveys.map(SurveyResponse::from)))
}
