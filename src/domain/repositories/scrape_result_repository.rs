// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

use crate::domain::models::scrape_result::ScrapeResult;
use crate::utils::errors::RepositoryError;

/// 抓取结果仓库特质
///
/// 定义抓取结果的数据访问接口。存储为仅追加模式，
/// 不存在更新或删除路径
#[async_trait]
pub trait ScrapeResultRepository: Send + Sync {
    /// 追加一条抓取结果，返回存储分配的标识符
    async fn append(&self, result: &ScrapeResult) -> Result<String, RepositoryError>;

    /// 按时间戳降序读取最近的记录
    async fn find_recent(&self, limit: u64) -> Result<Vec<ScrapeResult>, RepositoryError>;
}
