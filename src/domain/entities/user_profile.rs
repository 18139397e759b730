//! User profile entity and repository trait.
//!
//! Maps to the `profiles` table in the database schema. Identity itself
//! lives with the external auth provider; the profile row only carries the
//! fields this service needs to scope data.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::UserNetworkContext;
use crate::shared::error::AppError;

/// Profile of an authenticated dashboard user.
///
/// Maps to the `profiles` table:
/// - id: UUID PRIMARY KEY (same id as the auth provider's subject)
/// - email: TEXT NULL
/// - rede: TEXT NULL
/// - empresa: TEXT NULL
/// - sub_rede: TEXT NULL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: Option<String>,
    pub rede: Option<String>,
    pub empresa: Option<String>,
    pub sub_rede: Option<String>,
}

impl UserProfile {
    /// Network view of this profile, handed to the resolver.
    pub fn network_context(&self) -> UserNetworkContext {
        UserNetworkContext {
            email: self.email.clone(),
            rede: self.rede.clone(),
            empresa: self.empresa.clone(),
            sub_rede: self.sub_rede.clone(),
        }
    }
}

/// Repository trait for profile lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserProfileRepository: Send + Sync {
    /// Find a profile by the auth subject id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserProfile>, AppError>;
}
