//! Chat API 处理器

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::gateway::{handlers::ApiError, state::AppState};
use crate::responder;
use crate::utils::unix_timestamp_ms;

/// 未指定动物时在响应中回显的占位名
const UNKNOWN_ANIMAL: &str = "未知";

/// 对话请求体
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    message: String,
    #[serde(default)]
    animal: Option<String>,
}

/// 对话响应体
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    response: String,
    animal: String,
    timestamp: u64,
}

/// POST /chat 处理器
///
/// 请求体手动解析：格式不合法的 JSON 归入"未预期失败"（500），
/// 缺失或为空的 message 是校验错误（400）。
pub async fn handle_chat(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ChatResponse>, ApiError> {
    let request: ChatRequest = serde_json::from_str(&body).map_err(|e| {
        ApiError::internal(
            anyhow::Error::new(e).context("Invalid request body"),
            state.debug(),
        )
    })?;

    if request.message.is_empty() {
        return Err(ApiError::EmptyMessage);
    }

    // 空字符串的动物标签与缺失等价
    let animal = request.animal.as_deref().filter(|s| !s.is_empty());
    let response = responder::respond(state.knowledge(), &request.message, animal);

    tracing::debug!(
        animal = animal.unwrap_or(UNKNOWN_ANIMAL),
        reply_len = response.len(),
        "chat"
    );

    Ok(Json(ChatResponse {
        response,
        animal: animal.unwrap_or(UNKNOWN_ANIMAL).to_string(),
        timestamp: unix_timestamp_ms(),
    }))
}
