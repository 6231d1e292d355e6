// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::models::scrape_result::ScrapeResult;

/// 抓取统计实体
///
/// 基于最近的抓取记录窗口按需派生，不持久化、不缓存，
/// 每次读取时重新计算
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeStats {
    /// 窗口内的抓取总数
    pub total_scrapes: u64,
    /// 窗口内的成功次数
    pub successful_scrapes: u64,
    /// 窗口内的失败次数
    pub failed_scrapes: u64,
    /// 平均耗时（毫秒），窗口为空时为0
    pub average_duration: f64,
    /// 成功记录的单词数总和
    pub total_data_scraped: u64,
    /// 最近的记录（最新在前）
    pub recent_scrapes: Vec<ScrapeResult>,
}
