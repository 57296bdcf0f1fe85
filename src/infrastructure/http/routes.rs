//! HTTP Routes
//!
//! API Endpoints:
//! - /               GET    首页横幅
//! - /heroes         GET    列出所有英雄（含能力）
//! - /heroes/:id     GET    获取英雄详情
//! - /powers         GET    列出所有能力
//! - /powers/:id     GET    获取能力详情
//! - /powers/:id     PATCH  更新能力描述
//! - /hero_powers    POST   创建英雄能力关联

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::index))
        .nest("/heroes", hero_routes())
        .nest("/powers", power_routes())
        .route("/hero_powers", post(handlers::create_hero_power))
}

/// Hero 路由
fn hero_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::list_heroes))
        .route("/:hero_id", get(handlers::get_hero))
}

/// Power 路由
fn power_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::list_powers))
        .route(
            "/:power_id",
            get(handlers::get_power).patch(handlers::update_power),
        )
}
