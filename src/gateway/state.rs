//! Gateway 应用状态

use std::sync::Arc;

use crate::knowledge::Knowledge;

/// Gateway 应用状态
///
/// 知识库在启动时构建一次，之后所有请求共享只读引用。
#[derive(Clone)]
pub struct AppState {
    knowledge: Arc<Knowledge>,
    debug: bool,
}

impl AppState {
    pub fn new(knowledge: Knowledge, debug: bool) -> Self {
        Self {
            knowledge: Arc::new(knowledge),
            debug,
        }
    }

    pub fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    /// 调试模式下 500 响应携带完整错误链
    pub fn debug(&self) -> bool {
        self.debug
    }
}
