// Copyright 2026 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use async_trait::async_trait;
use std::time::Duration;

use crate::config::settings::FetcherSettings;
use crate::engines::traits::{FetchError, Fetcher};

/// 抓取引擎
///
/// 基于reqwest实现的基本HTTP抓取引擎，使用固定超时
/// 和浏览器型User-Agent，对目标URL执行恰好一次GET请求
pub struct FetchEngine {
    timeout: Duration,
    user_agent: String,
}

impl FetchEngine {
    /// 创建新的抓取引擎实例
    ///
    /// # 参数
    ///
    /// * `settings` - 抓取引擎配置
    ///
    /// # 返回值
    ///
    /// 返回新的抓取引擎实例
    pub fn new(settings: &FetcherSettings) -> Self {
        Self {
            timeout: Duration::from_secs(settings.timeout),
            user_agent: settings.user_agent.clone(),
        }
    }
}

#[async_trait]
impl Fetcher for FetchEngine {
    /// 执行HTTP抓取
    ///
    /// # 参数
    ///
    /// * `url` - 目标URL
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 响应正文（原始标记文本）
    /// * `Err(FetchError)` - 抓取过程中出现的错误
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        // Each request gets a fresh client for isolation
        let client = reqwest::Client::builder()
            .user_agent(self.user_agent.as_str())
            .timeout(self.timeout)
            .build()?;

        let response = client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::RequestFailed(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        let content = response.text().await?;
        Ok(content)
    }

    /// 获取引擎名称
    ///
    /// # 返回值
    ///
    /// 引擎名称
    fn name(&self) -> &'static str {
        "fetch"
    }
}
