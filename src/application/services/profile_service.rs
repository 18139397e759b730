//! Profile Service
//!
//! Turns an authenticated subject into the network context that every
//! other service receives explicitly.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::services::NetworkResolver;
use crate::domain::{NetworkResolutionDiagnostics, UserNetworkContext, UserProfileRepository};
use crate::shared::error::AppError;

/// Profile service trait
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Network context of a user, `None` when the profile row is missing
    async fn network_context(&self, user_id: Uuid) -> Result<Option<UserNetworkContext>, AppError>;

    /// How the user's network resolves
    async fn network_diagnostics(
        &self,
        user_id: Uuid,
    ) -> Result<NetworkResolutionDiagnostics, AppError>;
}

/// ProfileService implementation
pub struct ProfileServiceImpl<U>
where
    U: UserProfileRepository + ?Sized,
{
    profile_repo: Arc<U>,
}

impl<U> ProfileServiceImpl<U>
where
    U: UserProfileRepository + ?Sized,
{
    pub fn new(profile_repo: Arc<U>) -> Self {
        Self { profile_repo }
    }
}

#[async_trait]
impl<U> ProfileService for ProfileServiceImpl<U>
where
    U: UserProfileRepository + ?Sized,
{
    async fn network_context(&self, user_id: Uuid) -> Result<Option<UserNetworkContext>, AppError> {
        let profile = self.profile_repo.find_by_id(user_id).await?;

        if profile.is_none() {
            tracing::warn!(%user_id, "Authenticated user has no profile row");
        }

        Ok(profile.map(|p| p.network_context()))
    }

    async fn network_diagnostics(
        &self,
        user_id: Uuid,
    ) -> Result<NetworkResolutionDiagnostics, AppError> {
        let context = self.network_context(user_id).await?;
        Ok(NetworkResolver::get_network_resolution_info(context.as_ref()))
    }
}
