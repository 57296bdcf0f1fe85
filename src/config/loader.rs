//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. `DB_URI` 环境变量（仅数据库连接串）
//! 2. `HEROES_` 前缀环境变量
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 数据库连接串环境变量
const DB_URI_ENV: &str = "DB_URI";

/// 加载应用配置
///
/// # 环境变量示例
/// - `HEROES_SERVER__HOST=127.0.0.1`
/// - `HEROES_SERVER__PORT=8080`
/// - `HEROES_DATABASE__PATH=/data/app.db`
/// - `DB_URI=sqlite:////data/app.db`（SQLAlchemy 写法，四斜杠为绝对路径）
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let db_uri = std::env::var(DB_URI_ENV)
        .ok()
        .filter(|v| !v.is_empty())
        .map(|v| normalize_db_uri(&v));
    build_config(config_path, db_uri)
}

/// 将 SQLAlchemy 风格的 SQLite 连接串转换为 sqlx 形式
///
/// SQLAlchemy 中 `sqlite:///app.db` 为相对路径、`sqlite:////data/app.db` 为绝对路径、
/// `sqlite://` 为内存库；sqlx 把 `sqlite://` 之后的部分原样当作路径。
/// 其他形式（`sqlite:app.db`、`sqlite::memory:` 等）保持不变。
fn normalize_db_uri(uri: &str) -> String {
    if uri == "sqlite://" {
        return "sqlite::memory:".to_string();
    }
    match uri.strip_prefix("sqlite:///") {
        Some(path) => format!("sqlite://{}", path),
        None => uri.to_string(),
    }
}

fn build_config(
    config_path: Option<&Path>,
    db_uri: Option<String>,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5555)?
        .set_default("server.max_body_bytes", 1024 * 1024)?
        .set_default("database.path", "app.db")?
        .set_default("database.max_connections", 5)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量
    // 前缀: HEROES_，层级分隔符: __
    // 例如: HEROES_LOG__LEVEL=debug
    builder = builder.add_source(
        Environment::with_prefix("HEROES")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. DB_URI 覆盖（最高优先级）
    builder = builder.set_override_option("database.url", db_uri)?;

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.server.max_body_bytes == 0 {
        return Err(ConfigError::ValidationError(
            "Request body limit cannot be 0".to_string(),
        ));
    }

    match &config.database.url {
        Some(url) if url.is_empty() => {
            return Err(ConfigError::ValidationError(
                "Database URL cannot be empty".to_string(),
            ));
        }
        None if config.database.path.is_empty() => {
            return Err(ConfigError::ValidationError(
                "Database path cannot be empty".to_string(),
            ));
        }
        _ => {}
    }

    if config.database.max_connections == 0 {
        return Err(ConfigError::ValidationError(
            "Database max connections cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Max Body Size: {} bytes", config.server.max_body_bytes);
    match &config.database.url {
        Some(url) => tracing::info!("Database URL: {}", url),
        None => tracing::info!("Database: {}", config.database.path),
    }
    tracing::info!("Database Max Connections: {}", config.database.max_connections);
    tracing::info!("Log Level: {} (json: {})", config.log.level, config.log.json);
    tracing::info!("=================================");
}
