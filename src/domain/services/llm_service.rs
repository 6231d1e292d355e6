// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{json, Value};

use crate::config::settings::LlmSettings;

/// API密钥缺失时返回的固定降级消息
pub const API_KEY_MISSING: &str = "LLM API key is missing.";

#[async_trait]
pub trait LLMServiceTrait: Send + Sync {
    async fn analyze(&self, text: &str, prompt: &str) -> Result<String>;
}

/// LLM服务 - 处理与LLM提供商的交互
///
/// # 功能
///
/// 提供与大型语言模型（LLM）提供商的交互接口，
/// 对抓取到的网页文本执行自由格式的语义分析
///
/// # 配置
///
/// 通过 Settings 注入：
/// - `llm.api_key` - LLM API密钥（缺失时降级为固定消息，不报错）
/// - `llm.model` - 使用的模型名称（默认为 gpt-3.5-turbo）
/// - `llm.api_base_url` - LLM API基础URL
pub struct LLMService {
    api_key: Option<String>,
    model: String,
    api_base_url: String,
}

#[async_trait]
impl LLMServiceTrait for LLMService {
    async fn analyze(&self, text: &str, prompt: &str) -> Result<String> {
        LLMService::analyze(self, text, prompt).await
    }
}

impl LLMService {
    /// 创建新的LLM服务实例
    pub fn new(settings: &LlmSettings) -> Self {
        Self {
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            api_base_url: settings.api_base_url.clone(),
        }
    }

    pub fn new_with_config(api_key: Option<String>, model: String, api_base_url: String) -> Self {
        Self {
            api_key,
            model,
            api_base_url,
        }
    }

    /// 使用LLM分析文本内容
    ///
    /// # 参数
    /// * `text` - 输入文本（调用方已截断到上限）
    /// * `prompt` - 分析提示词
    ///
    /// # 返回值
    /// * `Result<String>` - 分析文本；密钥缺失时返回固定降级消息
    ///
    /// # 错误
    /// * 当LLM服务调用失败或响应格式无效时返回错误
    pub async fn analyze(&self, text: &str, prompt: &str) -> Result<String> {
        let api_key = match &self.api_key {
            Some(key) => key,
            // Missing key degrades to a fixed message instead of failing
            None => return Ok(API_KEY_MISSING.to_string()),
        };

        let client = reqwest::Client::new();
        let request_body = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": "You are an expert web content analyst."
                },
                {
                    "role": "user",
                    "content": format!("{}\n\n{}", prompt, text)
                }
            ],
            "temperature": 0.7
        });

        let url = format!("{}/chat/completions", self.api_base_url);
        let response = client
            .post(url)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request_body)
            .send()
            .await
            .context("Failed to send request to LLM API")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "LLM API returned error: {} - {}",
                status,
                error_text
            ));
        }

        let body: Value = response
            .json()
            .await
            .context("Failed to parse LLM API response")?;

        if let Some(content) = body["choices"][0]["message"]["content"].as_str() {
            Ok(content.trim().to_string())
        } else {
            Err(anyhow::anyhow!("Invalid response format from LLM API"))
        }
    }
}
