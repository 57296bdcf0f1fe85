//! SQLite Power Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::{map_sqlx_error, DbPool};
use crate::application::ports::{PowerRecord, PowerRepositoryPort, RepositoryError};
use crate::domain::PowerDescription;

/// SQLite Power Repository
pub struct SqlitePowerRepository {
    pool: DbPool,
}

impl SqlitePowerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct PowerRow {
    id: i64,
    name: String,
    description: String,
}

impl From<PowerRow> for PowerRecord {
    fn from(row: PowerRow) -> Self {
        PowerRecord {
            id: row.id,
            name: row.name,
            description: row.description,
        }
    }
}

#[async_trait]
impl PowerRepositoryPort for SqlitePowerRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<PowerRecord>, RepositoryError> {
        let row: Option<PowerRow> =
            sqlx::query_as("SELECT id, name, description FROM powers WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(row.map(PowerRecord::from))
    }

    async fn find_all(&self) -> Result<Vec<PowerRecord>, RepositoryError> {
        let rows: Vec<PowerRow> =
            sqlx::query_as("SELECT id, name, description FROM powers ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(PowerRecord::from).collect())
    }

    async fn update_description(
        &self,
        id: i64,
        description: &PowerDescription,
    ) -> Result<PowerRecord, RepositoryError> {
        // 单条语句完成更新并取回新值
        let row: Option<PowerRow> = sqlx::query_as(
            r#"
            UPDATE powers SET description = ?
            WHERE id = ?
            RETURNING id, name, description
            "#,
        )
        .bind(description.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(PowerRecord::from)
            .ok_or_else(|| RepositoryError::NotFound(format!("Power {}", id)))
    }
}
