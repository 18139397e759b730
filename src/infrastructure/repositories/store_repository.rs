//! Store Repository Implementation
//!
//! PostgreSQL implementation of the StoreRepository trait and of the
//! StoreLookup capability used to validate networks.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Store, StoreLookup, StoreRepository};
use crate::shared::error::AppError;

/// Database row representation of the `lojas` table.
#[derive(Debug, sqlx::FromRow)]
struct StoreRow {
    id: Uuid,
    nome: String,
    rede: String,
    sub_rede: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<StoreRow> for Store {
    fn from(row: StoreRow) -> Self {
        Self {
            id: row.id,
            nome: row.nome,
            rede: row.rede,
            sub_rede: row.sub_rede,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL store repository implementation.
#[derive(Clone)]
pub struct PgStoreRepository {
    pool: PgPool,
}

impl PgStoreRepository {
    /// Create a new PgStoreRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreRepository for PgStoreRepository {
    async fn list_by_network(&self, rede: &str) -> Result<Vec<Store>, AppError> {
        let rows = sqlx::query_as::<_, StoreRow>(
            r#"
            SELECT id, nome, rede, sub_rede, created_at
            FROM lojas
            WHERE rede = $1
            ORDER BY nome ASC
            "#,
        )
        .bind(rede)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Store::from).collect())
    }
}

#[async_trait]
impl StoreLookup for PgStoreRepository {
    async fn list_stores_for_network(&self, network: &str) -> Result<Vec<String>, AppError> {
        let ids: Vec<Uuid> = sqlx::query_scalar(
            r#"
            SELECT id
            FROM lojas
            WHERE rede = $1
            "#,
        )
        .bind(network)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids.into_iter().map(|id| id.to_string()).collect())
    }
}
