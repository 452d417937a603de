//! 健康检查处理器

use axum::Json;
use serde::Serialize;

/// 健康检查响应
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

/// GET /health
///
/// 永远返回 200，AR 客户端启动时用它探测服务是否可达。
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "Endangered Animal LLM Server",
        version: env!("CARGO_PKG_VERSION"),
    })
}
