//! SQLite Database - 数据库连接和迁移

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::application::ports::RepositoryError;

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 数据库连接 URL
    pub database_url: String,
    /// 最大连接数
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:app.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}

impl DatabaseConfig {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            database_url: format!("sqlite:{}?mode=rwc", path.as_ref().display()),
            max_connections: 5,
        }
    }

    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }

    fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:")
    }
}

/// 数据库连接池
pub type DbPool = Pool<Sqlite>;

/// 创建数据库连接池
///
/// 每个连接都启用外键约束、WAL 模式和 5 秒 busy_timeout
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5));

    let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections);

    // 内存数据库随连接关闭而消失，连接必须常驻
    if config.is_in_memory() {
        pool_options = pool_options
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    let pool = pool_options.connect_with(options).await?;

    tracing::info!(
        max_connections = config.max_connections,
        "SQLite pool created with foreign keys, WAL mode and busy_timeout=5000ms"
    );

    Ok(pool)
}

/// 运行数据库迁移
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    // 创建 heroes 表
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS heroes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            super_name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 创建 powers 表
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS powers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT NOT NULL CHECK (length(description) > 0)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 创建 hero_powers 表（允许同一 hero/power 组合出现多次）
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS hero_powers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            hero_id INTEGER NOT NULL,
            power_id INTEGER NOT NULL,
            strength TEXT NOT NULL CHECK (strength IN ('Strong', 'Weak', 'Average')),
            FOREIGN KEY (hero_id) REFERENCES heroes(id),
            FOREIGN KEY (power_id) REFERENCES powers(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 创建索引
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_hero_powers_hero_id
        ON hero_powers(hero_id)
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_hero_powers_power_id
        ON hero_powers(power_id)
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database migrations completed");
    Ok(())
}

/// 将 sqlx 错误映射为 Repository 错误
///
/// 唯一约束、外键、CHECK 约束违反映射为 `ConstraintViolation`，其余为 `DatabaseError`
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation()
            || db_err.is_foreign_key_violation()
            || db_err.is_check_violation()
        {
            return RepositoryError::ConstraintViolation(db_err.message().to_string());
        }
    }
    RepositoryError::DatabaseError(err.to_string())
}

/// 测试数据：英雄与能力只能通过外部导入写入，测试中直接插入
#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub async fn test_pool() -> DbPool {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        pool
    }

    pub async fn insert_hero(pool: &DbPool, name: &str, super_name: &str) -> i64 {
        sqlx::query_scalar("INSERT INTO heroes (name, super_name) VALUES (?, ?) RETURNING id")
            .bind(name)
            .bind(super_name)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    pub async fn insert_power(pool: &DbPool, name: &str, description: &str) -> i64 {
        sqlx::query_scalar("INSERT INTO powers (name, description) VALUES (?, ?) RETURNING id")
            .bind(name)
            .bind(description)
            .fetch_one(pool)
            .await
            .unwrap()
    }
}
