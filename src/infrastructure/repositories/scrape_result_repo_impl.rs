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
use chrono::Utc;
use sea_orm::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::models::scrape_result::{ScrapeMetadata, ScrapeResult, ScrapeStatus};
use crate::domain::repositories::scrape_result_repository::ScrapeResultRepository;
use crate::infrastructure::database::entities::scrape_result as scrape_result_entity;
use crate::utils::errors::RepositoryError;

/// 抓取结果仓库实现
pub struct ScrapeResultRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl ScrapeResultRepositoryImpl {
    /// 创建新的抓取结果仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的抓取结果仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// 将数据库模型转换为领域模型
    fn to_domain(model: scrape_result_entity::Model) -> ScrapeResult {
        let status = if model.status == "success" {
            ScrapeStatus::Success
        } else {
            ScrapeStatus::Error
        };

        ScrapeResult {
            id: model.id.to_string(),
            url: model.url,
            status,
            title: model.title,
            description: model.description,
            content: model.content,
            extracted_data: model
                .extracted_data
                .and_then(|value| serde_json::from_value(value).ok()),
            ai_analysis: model.ai_analysis,
            metadata: ScrapeMetadata {
                word_count: model.word_count as u64,
                image_count: model.image_count as u64,
                link_count: model.link_count as u64,
                paragraph_count: model.paragraph_count as u64,
                scrape_duration: model.scrape_duration_ms as u64,
            },
            timestamp: model.timestamp_ms,
            error_message: model.error_message,
        }
    }
}

#[async_trait]
impl ScrapeResultRepository for ScrapeResultRepositoryImpl {
    async fn append(&self, result: &ScrapeResult) -> Result<String, RepositoryError> {
        // The store assigns both the identifier and the write timestamp
        let id = Uuid::new_v4();

        let active_model = scrape_result_entity::ActiveModel {
            id: Set(id),
            url: Set(result.url.clone()),
            status: Set(result.status.as_str().to_string()),
            title: Set(result.title.clone()),
            description: Set(result.description.clone()),
            content: Set(result.content.clone()),
            extracted_data: Set(result
                .extracted_data
                .as_ref()
                .map(|data| serde_json::to_value(data).unwrap_or(serde_json::Value::Null))),
            ai_analysis: Set(result.ai_analysis.clone()),
            error_message: Set(result.error_message.clone()),
            word_count: Set(result.metadata.word_count as i64),
            image_count: Set(result.metadata.image_count as i64),
            link_count: Set(result.metadata.link_count as i64),
            paragraph_count: Set(result.metadata.paragraph_count as i64),
            scrape_duration_ms: Set(result.metadata.scrape_duration as i64),
            timestamp_ms: Set(result.timestamp),
            created_at: Set(Utc::now().into()),
        };

        scrape_result_entity::Entity::insert(active_model)
            .exec(self.db.as_ref())
            .await?;

        Ok(id.to_string())
    }

    async fn find_recent(&self, limit: u64) -> Result<Vec<ScrapeResult>, RepositoryError> {
        let models = scrape_result_entity::Entity::find()
            .order_by_desc(scrape_result_entity::Column::TimestampMs)
            .limit(limit)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Self::to_domain).collect())
    }
}
