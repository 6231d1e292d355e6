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

use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::application::dto::scrape_request::ScrapeRequestDto;
use crate::domain::services::scrape_service::{FailureKind, ScrapeOutcome, ScrapeService};

/// 创建抓取请求
///
/// 同步执行单次抓取并返回完整的结果记录：
/// - 验证失败返回 400 和简短错误体
/// - 抓取失败返回 500 和失败形状的结果记录
/// - 其余情况（含分析或存储降级）返回 200
pub async fn create_scrape(
    Extension(service): Extension<Arc<ScrapeService>>,
    Json(payload): Json<ScrapeRequestDto>,
) -> impl IntoResponse {
    match service.execute(payload).await {
        ScrapeOutcome::Success(result) => (StatusCode::OK, Json(result)).into_response(),
        ScrapeOutcome::Failed {
            kind: FailureKind::Validation,
            ..
        } => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": "Invalid URL provided"
            })),
        )
            .into_response(),
        ScrapeOutcome::Failed { result, .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(result)).into_response()
        }
    }
}
