//! 动物信息查询处理器

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::gateway::{handlers::ApiError, state::AppState};
use crate::knowledge::SubjectRecord;

/// 动物列表响应
#[derive(Serialize)]
pub struct AnimalsResponse {
    animals: Vec<&'static str>,
    count: usize,
}

/// GET /animal_info/{name}
///
/// 路径段由 `Path` 提取器做百分号解码（AR 客户端会对中文名转义）。
/// 名称未知时返回 404 并附上可用动物列表。
pub async fn handle_animal_info(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<SubjectRecord>, ApiError> {
    match state.knowledge().get(&name) {
        Some(record) => Ok(Json(record.clone())),
        None => Err(ApiError::UnknownAnimal {
            name,
            available: state.knowledge().names(),
        }),
    }
}

/// GET /animals
pub async fn handle_list_animals(State(state): State<AppState>) -> Json<AnimalsResponse> {
    let knowledge = state.knowledge();
    Json(AnimalsResponse {
        animals: knowledge.names(),
        count: knowledge.count(),
    })
}
