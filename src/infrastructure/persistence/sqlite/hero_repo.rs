//! SQLite Hero Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::{map_sqlx_error, DbPool};
use crate::application::ports::{HeroRecord, HeroRepositoryPort, RepositoryError};

/// SQLite Hero Repository
pub struct SqliteHeroRepository {
    pool: DbPool,
}

impl SqliteHeroRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct HeroRow {
    id: i64,
    name: String,
    super_name: String,
}

impl From<HeroRow> for HeroRecord {
    fn from(row: HeroRow) -> Self {
        HeroRecord {
            id: row.id,
            name: row.name,
            super_name: row.super_name,
        }
    }
}

#[async_trait]
impl HeroRepositoryPort for SqliteHeroRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<HeroRecord>, RepositoryError> {
        let row: Option<HeroRow> =
            sqlx::query_as("SELECT id, name, super_name FROM heroes WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(row.map(HeroRecord::from))
    }

    async fn find_all(&self) -> Result<Vec<HeroRecord>, RepositoryError> {
        let rows: Vec<HeroRow> =
            sqlx::query_as("SELECT id, name, super_name FROM heroes ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(HeroRecord::from).collect())
    }
}
