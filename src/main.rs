//! Refugium - 濒危动物科普问答服务
//!
//! 一个轻量级的 HTTP 服务器，为 AR 科普客户端提供濒危动物问答接口。
//!
//! # 功能特性
//!
//! - 基于关键词匹配的问答回复
//! - 内置三种濒危动物的知识库（大熊猫、东北虎、长江江豚）
//! - 动物信息查询和列表接口
//! - 允许跨域请求（AR 客户端通过 WebGL/移动端访问）
//!
//! # 命令行接口
//!
//! - `serve`: 启动问答服务器
//! - `test`: 向本地服务器发送测试请求

use anyhow::Result;
use clap::{Parser, Subcommand};
use refugium::commands;
use refugium::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Refugium CLI
#[derive(Parser)]
#[command(name = "refugium")]
#[command(about = "Endangered Animal Q&A Service", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// 可用的命令
#[derive(Subcommand)]
enum Commands {
    /// 启动问答服务器
    Serve,
    /// 向本地服务器发送测试请求
    Test,
}

#[tokio::main]
async fn main() -> Result<()> {
    // 加载 .env 文件（如果存在）
    if let Ok(dotenv_path) = std::env::var("REFUGIUM_ENV_FILE") {
        dotenvy::from_path(&dotenv_path).ok();
    } else {
        dotenvy::dotenv().ok();
    }

    // 解析命令行参数和配置
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // 初始化日志系统（DEBUG=true 时默认放宽到 debug 级别）
    let default_filter = if config.debug {
        "refugium=debug"
    } else {
        "refugium=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .init();

    // 执行相应的命令
    match cli.command {
        Commands::Serve => commands::serve_command(config).await,
        Commands::Test => commands::test_command(config).await,
    }
}
