//! Promotion Repository Implementation
//!
//! PostgreSQL implementation of the PromotionRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{NewPromotion, Promotion, PromotionRepository};
use crate::shared::error::AppError;

/// Database row representation of the `promocoes` table.
#[derive(Debug, sqlx::FromRow)]
struct PromotionRow {
    id: Uuid,
    rede: String,
    titulo: String,
    descricao: Option<String>,
    loja_id: Option<Uuid>,
    data_inicio: NaiveDate,
    data_fim: NaiveDate,
    ativa: bool,
    created_at: DateTime<Utc>,
}

impl From<PromotionRow> for Promotion {
    fn from(row: PromotionRow) -> Self {
        Self {
            id: row.id,
            rede: row.rede,
            titulo: row.titulo,
            descricao: row.descricao,
            loja_id: row.loja_id,
            data_inicio: row.data_inicio,
            data_fim: row.data_fim,
            ativa: row.ativa,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL promotion repository implementation.
#[derive(Clone)]
pub struct PgPromotionRepository {
    pool: PgPool,
}

impl PgPromotionRepository {
    /// Create a new PgPromotionRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PromotionRepository for PgPromotionRepository {
    async fn list_by_network(&self, rede: &str) -> Result<Vec<Promotion>, AppError> {
        let rows = sqlx::query_as::<_, PromotionRow>(
            r#"
            SELECT id, rede, titulo, descricao, loja_id, data_inicio, data_fim, ativa, created_at
            FROM promocoes
            WHERE rede = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(rede)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Promotion::from).collect())
    }

    async fn create(&self, promotion: NewPromotion) -> Result<Promotion, AppError> {
        let row = sqlx::query_as::<_, PromotionRow>(
            r#"
            INSERT INTO promocoes (id, rede, titulo, descricao, loja_id, data_inicio, data_fim)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, rede, titulo, descricao, loja_id, data_inicio, data_fim, ativa, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&promotion.rede)
        .bind(&promotion.titulo)
        .bind(&promotion.descricao)
        .bind(promotion.loja_id)
        .bind(promotion.data_inicio)
        .bind(promotion.data_fim)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }
}
