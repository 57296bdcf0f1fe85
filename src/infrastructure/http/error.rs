//! HTTP Error Handling
//!
//! 两种错误体格式:
//! - `{"error": "..."}` 单个资源查找失败 / 内部错误
//! - `{"errors": ["..."]}` 请求校验失败、关联引用不存在

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 单条错误响应
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// 多条错误响应
#[derive(Debug, Serialize)]
pub struct ErrorsResponse {
    pub errors: Vec<String>,
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 404 `{"error"}`
    NotFound(String),
    /// 400 `{"errors"}`
    BadRequest(Vec<String>),
    /// 404 `{"errors"}`
    MissingReference(Vec<String>),
    /// 500 `{"error"}`
    Internal(String),
}

impl ApiError {
    /// 资源未找到，消息形如 "Hero not found"
    pub fn not_found(resource_type: &str) -> Self {
        ApiError::NotFound(format!("{} not found", resource_type))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(vec![message.into()])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Resource not found");
                (StatusCode::NOT_FOUND, Json(ErrorResponse { error: msg })).into_response()
            }
            ApiError::BadRequest(errors) => {
                tracing::warn!(errors = ?errors, "Bad request");
                (StatusCode::BAD_REQUEST, Json(ErrorsResponse { errors })).into_response()
            }
            ApiError::MissingReference(errors) => {
                tracing::warn!(errors = ?errors, "Referenced resource not found");
                (StatusCode::NOT_FOUND, Json(ErrorsResponse { errors })).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse { error: msg }),
                )
                    .into_response()
            }
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { resource_type, id } => {
                tracing::debug!(id, "{} lookup missed", resource_type);
                ApiError::not_found(resource_type)
            }
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(vec![msg]),
            ApplicationError::ReferenceNotFound(msg) => ApiError::MissingReference(vec![msg]),
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}
