//! 应用配置模块
//!
//! 负责从环境变量加载应用配置，包括：
//! - 服务器监听端口
//! - 调试模式开关

use anyhow::{Context, Result};

/// 默认监听端口，与 AR 客户端内置的 serverURL 保持一致
const DEFAULT_PORT: u16 = 5000;

/// 应用配置
///
/// 包含服务器运行所需的所有配置项
#[derive(Debug, Clone)]
pub struct Config {
    /// 服务器监听地址（固定为 "0.0.0.0"，AR 客户端从局域网访问）
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
    /// 调试模式：开启后 500 响应携带完整错误链
    pub debug: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// # 环境变量
    ///
    /// - `PORT`: 服务器监听端口（默认: 5000）
    /// - `DEBUG`: 调试模式，接受 "1" 或 "true"（默认: false）
    ///
    /// # 错误
    ///
    /// - 如果 `PORT` 不是有效的端口号
    pub fn from_env() -> Result<Self> {
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse()
            .context("PORT must be a valid port number")?;

        let debug = std::env::var("DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            host: "0.0.0.0".to_string(),
            port,
            debug,
        })
    }
}
