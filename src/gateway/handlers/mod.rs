//! HTTP 请求处理器

pub mod animals;
pub mod chat;
pub mod health;

pub use animals::{handle_animal_info, handle_list_animals};
pub use chat::handle_chat;
pub use health::handle_health;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

/// API 错误分类
///
/// 每种错误都映射为一个 JSON 错误对象和对应的状态码，
/// 处理器返回 `Result<_, ApiError>` 即可。
#[derive(Debug, Error)]
pub enum ApiError {
    /// 空消息，400
    #[error("消息不能为空")]
    EmptyMessage,
    /// 未知动物，404，响应附带可用动物列表
    #[error("未找到动物 '{name}' 的信息")]
    UnknownAnimal {
        name: String,
        available: Vec<&'static str>,
    },
    /// 其他未预期的失败，500
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// 包装未预期的错误
    ///
    /// 调试模式下携带完整错误链，否则只返回统一的提示语。
    pub fn internal(err: anyhow::Error, verbose: bool) -> Self {
        tracing::error!(error = %format!("{:#}", err), "internal error");
        if verbose {
            ApiError::Internal(format!("{:#}", err))
        } else {
            ApiError::Internal("服务器内部错误".to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            ApiError::EmptyMessage => StatusCode::BAD_REQUEST,
            ApiError::UnknownAnimal { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            ApiError::UnknownAnimal { available, .. } => json!({
                "error": self.to_string(),
                "available_animals": available,
            }),
            _ => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
