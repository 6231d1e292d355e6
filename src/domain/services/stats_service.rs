// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::warn;

use crate::domain::models::scrape_result::ScrapeStatus;
use crate::domain::models::scrape_stats::ScrapeStats;
use crate::domain::repositories::scrape_result_repository::ScrapeResultRepository;

/// 统计窗口大小（最近N条记录）
pub const STATS_WINDOW: u64 = 100;
/// 返回给调用方的最近记录条数
pub const RECENT_LIMIT: usize = 10;

/// 统计服务
///
/// 基于最近的记录窗口按需计算聚合统计。只读，
/// 不修改任何状态；每次读取重新计算，不缓存
pub struct StatsService {
    repository: Arc<dyn ScrapeResultRepository>,
}

impl StatsService {
    /// 创建新的统计服务实例
    ///
    /// # 参数
    ///
    /// * `repository` - 抓取结果仓库
    ///
    /// # 返回值
    ///
    /// 返回新的统计服务实例
    pub fn new(repository: Arc<dyn ScrapeResultRepository>) -> Self {
        Self { repository }
    }

    /// 计算聚合统计
    ///
    /// 存储不可用时返回全零统计而不是失败，
    /// 与写路径的降级策略保持一致
    ///
    /// # 返回值
    ///
    /// 返回计算出的统计数据
    pub async fn compute(&self) -> ScrapeStats {
        let records = match self.repository.find_recent(STATS_WINDOW).await {
            Ok(records) => records,
            Err(e) => {
                warn!("Failed to read scrape records for stats: {}", e);
                return ScrapeStats::default();
            }
        };

        let total_scrapes = records.len() as u64;
        let successful_scrapes = records
            .iter()
            .filter(|r| r.status == ScrapeStatus::Success)
            .count() as u64;
        let failed_scrapes = total_scrapes - successful_scrapes;

        let average_duration = if records.is_empty() {
            0.0
        } else {
            let total: u64 = records.iter().map(|r| r.metadata.scrape_duration).sum();
            total as f64 / records.len() as f64
        };

        let total_data_scraped = records
            .iter()
            .filter(|r| r.status == ScrapeStatus::Success)
            .map(|r| r.metadata.word_count)
            .sum();

        let recent_scrapes = records.into_iter().take(RECENT_LIMIT).collect();

        ScrapeStats {
            total_scrapes,
            successful_scrapes,
            failed_scrapes,
            average_duration,
            total_data_scraped,
            recent_scrapes,
        }
    }
}
