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

use serde::{Deserialize, Serialize};

/// 抓取请求数据传输对象
///
/// 用于封装客户端发起的单页抓取请求的相关参数
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeRequestDto {
    /// 要抓取的网页URL
    pub url: String,
    /// 抓取模式
    #[serde(default)]
    pub mode: ScrapeMode,
    /// 自定义分析提示词（仅 nerd 模式下生效）
    pub custom_prompt: Option<String>,
}

/// 抓取模式
///
/// basic 仅提取内容；nerd 在提取后追加LLM语义分析
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScrapeMode {
    /// 仅提取
    #[default]
    Basic,
    /// 提取并分析
    Nerd,
}
