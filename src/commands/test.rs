//! Test 命令 - 发送测试请求到本地服务器
//!
//! 此模块实现 `test` 命令，用于向本地运行的 Refugium 服务器发送测试请求，
//! 验证服务是否正常工作。

use anyhow::{Context, Result};

use crate::config::Config;

/// 执行测试命令
///
/// # 参数
///
/// * `config` - 应用配置，用于获取服务器地址
///
/// # 功能
///
/// - 先探测 `/health` 确认服务在线
/// - 再向 `/chat` 端点发送一条问答消息
/// - 显示响应状态和内容
///
/// # 测试请求内容
///
/// 以"大熊猫"为对象发送一条介绍类提问
///
/// # 返回
///
/// 成功时返回 Ok(())，失败时返回错误信息
pub async fn test_command(config: Config) -> Result<()> {
    let base_url = format!("http://127.0.0.1:{}", config.port);
    let client = reqwest::Client::new();

    println!("Checking server health...");

    let health = client
        .get(format!("{}/health", base_url))
        .send()
        .await
        .context("Request failed. Make sure the server is running.")?;

    println!("Health status: {}", health.status());

    // 构造测试请求体
    let test_body = serde_json::json!({
        "message": "请介绍一下大熊猫",
        "animal": "大熊猫"
    });

    let url = format!("{}/chat", base_url);
    println!("Request URL: {}", url);

    // 发送请求
    let response = client
        .post(&url)
        .json(&test_body)
        .send()
        .await
        .context("Request failed. Make sure the server is running.")?;

    let status = response.status();
    println!("Response status: {}", status);

    // 检查响应状态
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("Request failed: {}", body);
    }

    // 显示响应内容
    let body = response
        .text()
        .await
        .context("Failed to read response body")?;

    println!("Response:");
    println!("{}", body);

    Ok(())
}
