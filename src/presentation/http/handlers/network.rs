//! Network Handlers

use axum::{extract::State, Extension, Json};

use crate::application::services::{ProfileService, ProfileServiceImpl};
use crate::domain::NetworkResolutionDiagnostics;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// How the caller's network resolves: the chosen value, the field it came
/// from and which fields the profile has.
pub async fn get_network_diagnostics(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<NetworkResolutionDiagnostics>, AppError> {
    let profile_service = ProfileServiceImpl::new(state.repositories.profiles.clone());
    let diagnostics = profile_service.network_diagnostics(auth.user_id).await?;

    Ok(Json(diagnostics))
}
