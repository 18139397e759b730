//! Survey Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Survey, SurveyRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct SurveyRow {
    id: Uuid,
    rede: String,
    titulo: String,
    pergunta: String,
    ativa: bool,
    created_at: DateTime<Utc>,
}

impl From<SurveyRow> for Survey {
    fn from(row: SurveyRow) -> Self {
        Self {
            id: row.id,
            rede: row.rede,
            titulo: row.titulo,
            pergunta: row.pergunta,
            ativa: row.ativa,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL survey repository implementation.
#[derive(Clone)]
pub struct PgSurveyRepository {
    pool: PgPool,
}

impl PgSurveyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SurveyRepository for PgSurveyRepository {
    async fn list_by_network(&self, rede: &str) -> Result<Vec<Survey>, AppError> {
        let rows = sqlx::query_as::<_, SurveyRow>(
            r#"
            SELECT id, rede, titulo, pergunta, ativa, created_at
            FROM pesquisas
            WHERE rede = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(rede)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Survey::from).collect())
    }
}
