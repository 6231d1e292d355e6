// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 无标题时使用的占位文本
pub const NO_TITLE: &str = "No title found";
/// 无描述时使用的占位文本
pub const NO_DESCRIPTION: &str = "No description available";

/// 抓取结果实体
///
/// 存储单次网页抓取尝试的结果数据，包含提取到的内容、
/// 可选的AI分析和性能指标。每次请求恰好产生一条结果记录，
/// 创建后不可变（仅追加存储）。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeResult {
    /// 结果唯一标识符；由存储分配，存储不可用时本地合成（local-前缀）
    pub id: String,
    /// 目标URL，失败时也会保留
    pub url: String,
    /// 抓取状态，创建时设置一次，之后不再变化
    pub status: ScrapeStatus,
    /// 页面标题，缺失时为占位文本
    pub title: String,
    /// 页面描述，缺失时为占位文本
    pub description: String,
    /// 纯文本正文，存储前截断到固定上限
    pub content: String,
    /// 结构化提取数据，仅在提取成功时存在
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_data: Option<ExtractedData>,
    /// AI分析文本，仅在请求了分析时存在
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<String>,
    /// 抓取指标，失败时计数为0但始终存在
    pub metadata: ScrapeMetadata,
    /// 客户端观察到的创建时间（毫秒时间戳），区别于存储端写入时间
    pub timestamp: i64,
    /// 错误消息，仅在 status = error 时存在
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// 抓取状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrapeStatus {
    /// 成功
    Success,
    /// 失败
    Error,
}

impl ScrapeStatus {
    /// 转换为存储用字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrapeStatus::Success => "success",
            ScrapeStatus::Error => "error",
        }
    }
}

/// 结构化提取数据
///
/// 标题、链接和图片的展示列表（各自有固定上限），
/// 未截断的总数记录在 ScrapeMetadata 中
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedData {
    /// 标题列表（h1-h6），文档顺序，最多20条
    pub headings: Vec<String>,
    /// 链接列表，文档顺序，最多50条
    pub links: Vec<LinkItem>,
    /// 图片列表，文档顺序，最多30条
    pub images: Vec<ImageItem>,
}

/// 链接条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    /// 链接文本
    pub text: String,
    /// href属性原始值，缺失时为空
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// 图片条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageItem {
    /// src属性原始值，缺失时为空
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// alt属性原始值，缺失时为空
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// 抓取指标
///
/// 计数为文档内的未截断总数；持续时间为从请求开始到
/// 响应生成的墙钟毫秒数，无论成功失败均会记录
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeMetadata {
    /// 正文单词数
    pub word_count: u64,
    /// 图片总数
    pub image_count: u64,
    /// 链接总数
    pub link_count: u64,
    /// 段落总数
    pub paragraph_count: u64,
    /// 抓取耗时（毫秒）
    pub scrape_duration: u64,
}
