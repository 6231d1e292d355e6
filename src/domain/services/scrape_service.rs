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

use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, instrument, warn};

use crate::application::dto::scrape_request::{ScrapeMode, ScrapeRequestDto};
use crate::domain::models::scrape_result::{
    ExtractedData, ScrapeMetadata, ScrapeResult, ScrapeStatus, NO_DESCRIPTION, NO_TITLE,
};
use crate::domain::repositories::scrape_result_repository::ScrapeResultRepository;
use crate::domain::services::extraction_service::ExtractionService;
use crate::domain::services::llm_service::LLMServiceTrait;
use crate::engines::traits::Fetcher;
use crate::utils::text_processing::truncate_chars;
use crate::utils::validators;

/// 存储正文的最大字符数
pub const MAX_STORED_CONTENT_CHARS: usize = 5000;
/// 提交给LLM分析的最大字符数
pub const MAX_ANALYSIS_INPUT_CHARS: usize = 10_000;

/// 分析失败时替换的占位文本
pub const ANALYSIS_UNAVAILABLE: &str = "AI analysis temporarily unavailable. Please try again.";

/// 默认分析提示词
///
/// 调用方未提供自定义提示词时使用
pub const DEFAULT_ANALYSIS_PROMPT: &str = r#"You are an expert web content analyst. Analyze this webpage thoroughly and provide:

📋 **CONTENT OVERVIEW:**
- Main topic and purpose of the page
- Target audience and content type

🔑 **KEY INSIGHTS:**
- Most important information discovered
- Main arguments or value propositions
- Critical data points or statistics

📊 **CONTENT ANALYSIS:**
- Content quality and depth assessment
- Writing style and tone
- Structural organization and clarity

💭 **SENTIMENT & INTENT:**
- Overall sentiment (positive/neutral/negative)
- Author's intent and objectives
- Emotional appeal and persuasion techniques

🎯 **ACTIONABLE TAKEAWAYS:**
- Top 3-5 key takeaways
- What makes this content unique
- Recommended use cases for this information

Keep the analysis well-structured, insightful, and professional."#;

/// 失败类别
///
/// 只有验证和抓取失败会改变HTTP层面的结果；
/// 分析和存储失败在编排器内部被吸收
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// URL验证失败
    Validation,
    /// 网络抓取失败
    Fetch,
}

/// 抓取结果输出
///
/// 无论成功失败，调用方都会得到一条完整的结果记录
#[derive(Debug)]
pub enum ScrapeOutcome {
    /// 抓取成功
    Success(ScrapeResult),
    /// 抓取失败
    Failed {
        /// 失败类别
        kind: FailureKind,
        /// 失败记录
        result: ScrapeResult,
    },
}

/// 抓取服务
///
/// 编排单次抓取请求的完整流程：
/// 验证 → 抓取 → 提取 → （分析）→ 记录 → 响应。
/// 依赖通过构造函数显式注入，便于替换为测试替身
pub struct ScrapeService {
    fetcher: Arc<dyn Fetcher>,
    llm: Arc<dyn LLMServiceTrait>,
    repository: Arc<dyn ScrapeResultRepository>,
}

impl ScrapeService {
    /// 创建新的抓取服务实例
    ///
    /// # 参数
    ///
    /// * `fetcher` - 抓取引擎
    /// * `llm` - LLM服务
    /// * `repository` - 抓取结果仓库
    ///
    /// # 返回值
    ///
    /// 返回新的抓取服务实例
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        llm: Arc<dyn LLMServiceTrait>,
        repository: Arc<dyn ScrapeResultRepository>,
    ) -> Self {
        Self {
            fetcher,
            llm,
            repository,
        }
    }

    /// 执行一次抓取请求
    ///
    /// # 参数
    ///
    /// * `request` - 抓取请求
    ///
    /// # 返回值
    ///
    /// 返回抓取结果输出；耗时从进入本方法开始以墙钟计量
    #[instrument(skip(self, request), fields(url = %request.url))]
    pub async fn execute(&self, request: ScrapeRequestDto) -> ScrapeOutcome {
        let started = Instant::now();

        // Validating: rejected inputs never reach the network
        if validators::validate_scrape_url(&request.url).is_err() {
            warn!("Rejected invalid scrape URL");
            let result = self
                .persist(Self::error_result(
                    &request.url,
                    "Invalid URL provided",
                    started,
                ))
                .await;
            return ScrapeOutcome::Failed {
                kind: FailureKind::Validation,
                result,
            };
        }

        // Fetching
        let markup = match self.fetcher.fetch(&request.url).await {
            Ok(markup) => markup,
            Err(e) => {
                warn!("Fetch failed: {}", e);
                let result = self
                    .persist(Self::error_result(&request.url, &e.to_string(), started))
                    .await;
                return ScrapeOutcome::Failed {
                    kind: FailureKind::Fetch,
                    result,
                };
            }
        };

        // Extracting
        let content = ExtractionService::extract(&markup);

        // Analyzing (nerd mode only); failure is absorbed into a placeholder
        let ai_analysis = match request.mode {
            ScrapeMode::Nerd => Some(
                self.run_analysis(&content.body_text, request.custom_prompt.as_deref())
                    .await,
            ),
            ScrapeMode::Basic => None,
        };

        let result = ScrapeResult {
            id: String::new(),
            url: request.url.clone(),
            status: ScrapeStatus::Success,
            title: content.title,
            description: content.description,
            content: truncate_chars(&content.body_text, MAX_STORED_CONTENT_CHARS),
            extracted_data: Some(ExtractedData {
                headings: content.headings,
                links: content.links,
                images: content.images,
            }),
            ai_analysis,
            metadata: ScrapeMetadata {
                word_count: content.word_count as u64,
                image_count: content.image_count as u64,
                link_count: content.link_count as u64,
                paragraph_count: content.paragraphs.len() as u64,
                scrape_duration: started.elapsed().as_millis() as u64,
            },
            timestamp: Utc::now().timestamp_millis(),
            error_message: None,
        };

        // Recording never blocks the response
        let result = self.persist(result).await;
        info!(
            duration_ms = result.metadata.scrape_duration,
            "Scrape completed"
        );
        ScrapeOutcome::Success(result)
    }

    /// 执行LLM分析
    ///
    /// 输入文本先截断到上限；任何分析失败都降级为占位文本
    async fn run_analysis(&self, body_text: &str, custom_prompt: Option<&str>) -> String {
        let prompt = custom_prompt.unwrap_or(DEFAULT_ANALYSIS_PROMPT);
        let text = truncate_chars(body_text, MAX_ANALYSIS_INPUT_CHARS);

        match self.llm.analyze(&text, prompt).await {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!("AI analysis failed: {}", e);
                ANALYSIS_UNAVAILABLE.to_string()
            }
        }
    }

    /// 持久化抓取结果
    ///
    /// 存储失败时记录日志并以本地合成的标识符代替，
    /// 这是存储降级的唯一吸收点
    async fn persist(&self, mut result: ScrapeResult) -> ScrapeResult {
        match self.repository.append(&result).await {
            Ok(id) => result.id = id,
            Err(e) => {
                warn!("Failed to persist scrape result for {}: {}", result.url, e);
                result.id = format!("local-{}", result.timestamp);
            }
        }
        result
    }

    /// 构建失败结果
    ///
    /// 计数为0，但耗时照常计量；缺失字段使用占位文本
    fn error_result(url: &str, message: &str, started: Instant) -> ScrapeResult {
        ScrapeResult {
            id: String::new(),
            url: url.to_string(),
            status: ScrapeStatus::Error,
            title: NO_TITLE.to_string(),
            description: NO_DESCRIPTION.to_string(),
            content: String::new(),
            extracted_data: None,
            ai_analysis: None,
            metadata: ScrapeMetadata {
                scrape_duration: started.elapsed().as_millis() as u64,
                ..Default::default()
            },
            timestamp: Utc::now().timestamp_millis(),
            error_message: Some(message.to_string()),
        }
    }
}
