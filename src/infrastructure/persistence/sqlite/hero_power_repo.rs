//! SQLite HeroPower Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::{map_sqlx_error, DbPool};
use crate::application::ports::{
    HeroPowerDetail, HeroPowerRecord, HeroPowerRepositoryPort, NewHeroPower, PowerRecord,
    RepositoryError,
};
use crate::domain::Strength;

/// SQLite HeroPower Repository
pub struct SqliteHeroPowerRepository {
    pool: DbPool,
}

impl SqliteHeroPowerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

const DETAIL_SELECT: &str = r#"
    SELECT hp.id, hp.hero_id, hp.power_id, hp.strength,
           p.name AS power_name, p.description AS power_description
    FROM hero_powers hp
    JOIN powers p ON p.id = hp.power_id
"#;

#[derive(FromRow)]
struct HeroPowerDetailRow {
    id: i64,
    hero_id: i64,
    power_id: i64,
    strength: String,
    power_name: String,
    power_description: String,
}

fn parse_strength(s: &str) -> Result<Strength, RepositoryError> {
    s.parse::<Strength>()
        .map_err(|e| RepositoryError::SerializationError(e.to_string()))
}

impl TryFrom<HeroPowerDetailRow> for HeroPowerDetail {
    type Error = RepositoryError;

    fn try_from(row: HeroPowerDetailRow) -> Result<Self, Self::Error> {
        Ok(HeroPowerDetail {
            hero_power: HeroPowerRecord {
                id: row.id,
                hero_id: row.hero_id,
                power_id: row.power_id,
                strength: parse_strength(&row.strength)?,
            },
            power: PowerRecord {
                id: row.power_id,
                name: row.power_name,
                description: row.power_description,
            },
        })
    }
}

#[async_trait]
impl HeroPowerRepositoryPort for SqliteHeroPowerRepository {
    async fn create(&self, hero_power: &NewHeroPower) -> Result<HeroPowerRecord, RepositoryError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO hero_powers (hero_id, power_id, strength)
            VALUES (?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(hero_power.hero_id)
        .bind(hero_power.power_id)
        .bind(hero_power.strength.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(HeroPowerRecord {
            id,
            hero_id: hero_power.hero_id,
            power_id: hero_power.power_id,
            strength: hero_power.strength,
        })
    }

    async fn find_details_by_hero(
        &self,
        hero_id: i64,
    ) -> Result<Vec<HeroPowerDetail>, RepositoryError> {
        let sql = format!("{} WHERE hp.hero_id = ? ORDER BY hp.id", DETAIL_SELECT);
        let rows: Vec<HeroPowerDetailRow> = sqlx::query_as(&sql)
            .bind(hero_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.into_iter().map(HeroPowerDetail::try_from).collect()
    }

    async fn find_all_details(&self) -> Result<Vec<HeroPowerDetail>, RepositoryError> {
        let sql = format!("{} ORDER BY hp.hero_id, hp.id", DETAIL_SELECT);
        let rows: Vec<HeroPowerDetailRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.into_iter().map(HeroPowerDetail::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::fixtures::*;

    #[tokio::test]
    async fn test_create_and_find_details() {
        let pool = test_pool().await;
        let hero = insert_hero(&pool, "Kamala Khan", "Ms. Marvel").await;
        let flight = insert_power(&pool, "flight", "gives the wielder the ability to fly").await;
        let repo = SqliteHeroPowerRepository::new(pool);

        let created = repo
            .create(&NewHeroPower {
                hero_id: hero,
                power_id: flight,
                strength: Strength::Average,
            })
            .await
            .unwrap();

        let details = repo.find_details_by_hero(hero).await.unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].hero_power, created);
        assert_eq!(details[0].power.name, "flight");
        assert!(repo.find_details_by_hero(hero + 1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_same_pair_can_be_created_twice() {
        let pool = test_pool().await;
        let hero = insert_hero(&pool, "Kamala Khan", "Ms. Marvel").await;
        let power = insert_power(&pool, "flight", "gives the wielder the ability to fly").await;
        let repo = SqliteHeroPowerRepository::new(pool);

        let new = NewHeroPower {
            hero_id: hero,
            power_id: power,
            strength: Strength::Strong,
        };
        repo.create(&new).await.unwrap();
        repo.create(&new).await.unwrap();

        assert_eq!(repo.find_all_details().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_with_missing_hero_violates_foreign_key() {
        let pool = test_pool().await;
        let power = insert_power(&pool, "flight", "gives the wielder the ability to fly").await;
        let repo = SqliteHeroPowerRepository::new(pool);

        let err = repo
            .create(&NewHeroPower {
                hero_id: 999,
                power_id: power,
                strength: Strength::Weak,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
    }
}
