//! Custom Extractors
//!
//! Axum extractors that turn the authenticated request into the explicit
//! network context handed to services.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::application::services::{ProfileService, ProfileServiceImpl};
use crate::domain::UserNetworkContext;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Network context of the authenticated user.
///
/// `None` when the user has no profile row; services treat that the same
/// as a profile without network fields.
#[derive(Debug, Clone)]
pub struct CurrentNetworkContext(pub Option<UserNetworkContext>);

impl FromRequestParts<AppState> for CurrentNetworkContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = parts
            .extensions
            .get::<AuthUser>()
            .copied()
            .ok_or_else(|| AppError::Unauthorized("Missing authenticated user".into()))?;

        let profiles = ProfileServiceImpl::new(state.repositories.profiles.clone());
        let context = profiles.network_context(auth.user_id).await?;

        Ok(Self(context))
    }
}
