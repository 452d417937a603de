//! Refugium 库入口
//!
//! 服务逻辑以库形式暴露，`main.rs` 与集成测试共用。

pub mod commands;
pub mod config;
pub mod gateway;
pub mod knowledge;
pub mod responder;
pub mod utils;
