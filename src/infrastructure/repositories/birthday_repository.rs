//! Birthday Message Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{BirthdayMessage, BirthdayRepository, NewBirthdayMessage};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct BirthdayMessageRow {
    id: Uuid,
    rede: String,
    mensagem: String,
    dias_antecedencia: i32,
    ativa: bool,
    created_at: DateTime<Utc>,
}

impl From<BirthdayMessageRow> for BirthdayMessage {
    fn from(row: BirthdayMessageRow) -> Self {
        Self {
            id: row.id,
            rede: row.rede,
            mensagem: row.mensagem,
            dias_antecedencia: row.dias_antecedencia,
            ativa: row.ativa,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL birthday message repository implementation.
#[derive(Clone)]
pub struct PgBirthdayRepository {
    pool: PgPool,
}

impl PgBirthdayRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BirthdayRepository for PgBirthdayRepository {
    async fn list_by_network(&self, rede: &str) -> Result<Vec<BirthdayMessage>, AppError> {
        let rows = sqlx::query_as::<_, BirthdayMessageRow>(
            r#"
            SELECT id, rede, mensagem, dias_antecedencia, ativa, created_at
            FROM mensagens_aniversario
            WHERE rede = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(rede)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BirthdayMessage::from).collect())
    }

    async fn create(&self, message: NewBirthdayMessage) -> Result<BirthdayMessage, AppError> {
        let row = sqlx::query_as::<_, BirthdayMessageRow>(
            r#"
            INSERT INTO mensagens_aniversario (id, rede, mensagem, dias_antecedencia)
            VALUES ($1, $2, $3, $4)
            RETURNING id, rede, mensagem, dias_antecedencia, ativa, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&message.rede)
        .bind(&message.mensagem)
        .bind(message.dias_antecedencia)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }
}
