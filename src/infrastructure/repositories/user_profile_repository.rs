//! User Profile Repository Implementation
//!
//! PostgreSQL implementation of the UserProfileRepository trait.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{UserProfile, UserProfileRepository};
use crate::shared::error::AppError;

/// Database row representation of the `profiles` table.
#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    email: Option<String>,
    rede: Option<String>,
    empresa: Option<String>,
    sub_rede: Option<String>,
}

impl From<ProfileRow> for UserProfile {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            rede: row.rede,
            empresa: row.empresa,
            sub_rede: row.sub_rede,
        }
    }
}

/// PostgreSQL profile repository implementation.
#[derive(Clone)]
pub struct PgUserProfileRepository {
    pool: PgPool,
}

impl PgUserProfileRepository {
    /// Create a new PgUserProfileRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserProfileRepository for PgUserProfileRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserProfile>, AppError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT id, email, rede, empresa, sub_rede
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserProfile::from))
    }
}
