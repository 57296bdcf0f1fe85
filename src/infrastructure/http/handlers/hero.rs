//! Hero HTTP Handlers

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use std::sync::Arc;

use crate::application::{GetHero, ListHeroes};
use crate::infrastructure::http::dto::HeroResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取英雄列表（含各自的能力）
pub async fn list_heroes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<HeroResponse>>, ApiError> {
    let result = state.list_heroes_handler.handle(ListHeroes).await?;

    Ok(Json(result.into_iter().map(HeroResponse::from).collect()))
}

/// 获取英雄详情
///
/// 非整数 id 与不存在的 id 一样返回 404
pub async fn get_hero(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<HeroResponse>, ApiError> {
    let Path(hero_id) = path.map_err(|_| ApiError::not_found("Hero"))?;

    let result = state.get_hero_handler.handle(GetHero { hero_id }).await?;

    Ok(Json(HeroResponse::from(result)))
}
