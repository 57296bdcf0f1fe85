//! Heroes API - 英雄 / 能力 REST 服务
//!
//! 启动流程: 配置 -> 日志 -> 数据库 -> HTTP 服务器

use heroes_api::config::{load_config, print_config, LogConfig};
use heroes_api::infrastructure::http::{AppState, HttpServer, ServerConfig};
use heroes_api::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig,
};

/// 初始化日志（RUST_LOG 优先）
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},heroes_api={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：DB_URI > 环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Heroes API v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 确保数据库目录存在
    if let Some(path) = config.database.file_path() {
        if let Some(parent) = std::path::Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    // 创建应用状态（Repository 适配器共享连接池）
    let state = AppState::with_sqlite(pool.clone());

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_max_body_bytes(config.server.max_body_bytes);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl-c: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}
