//! Power HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use std::sync::Arc;

use crate::application::{GetPower, ListPowers, UpdatePower};
use crate::infrastructure::http::dto::{PowerResponse, UpdatePowerRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

fn power_id_from(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|_| ApiError::not_found("Power"))
}

/// 获取能力列表
pub async fn list_powers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PowerResponse>>, ApiError> {
    let result = state.list_powers_handler.handle(ListPowers).await?;

    Ok(Json(result.into_iter().map(PowerResponse::from).collect()))
}

/// 获取能力详情
pub async fn get_power(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<PowerResponse>, ApiError> {
    let power_id = power_id_from(path)?;

    let result = state.get_power_handler.handle(GetPower { power_id }).await?;

    Ok(Json(PowerResponse::from(result)))
}

/// 更新能力描述
pub async fn update_power(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdatePowerRequest>, JsonRejection>,
) -> Result<Json<PowerResponse>, ApiError> {
    let power_id = power_id_from(path)?;

    let description = body
        .map_err(ApiError::from)
        .and_then(|Json(req)| req.into_description());

    let description = match description {
        Ok(description) => description,
        Err(e) => {
            // 能力不存在时优先返回 404，其次才是请求体错误
            state.get_power_handler.handle(GetPower { power_id }).await?;
            return Err(e);
        }
    };

    let command = UpdatePower {
        power_id,
        description,
    };
    let result = state.update_power_handler.handle(command).await?;

    Ok(Json(PowerResponse::from(result)))
}
