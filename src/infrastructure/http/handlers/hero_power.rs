//! HeroPower HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use crate::application::CreateHeroPower;
use crate::infrastructure::http::dto::{CreateHeroPowerRequest, HeroPowerResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 创建英雄能力关联
///
/// 成功时返回 200（而非 201），附带嵌套的英雄与能力
pub async fn create_hero_power(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateHeroPowerRequest>, JsonRejection>,
) -> Result<Json<HeroPowerResponse>, ApiError> {
    let Json(req) = body?;
    let command: CreateHeroPower = req.try_into()?;

    let result = state.create_hero_power_handler.handle(command).await?;

    Ok(Json(HeroPowerResponse::from(result)))
}
