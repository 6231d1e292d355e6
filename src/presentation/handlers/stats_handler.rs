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

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use crate::domain::services::stats_service::StatsService;

/// 读取聚合统计
///
/// 任何内部失败都降级为全零统计，本端点永远返回 200
pub async fn get_stats(
    Extension(service): Extension<Arc<StatsService>>,
) -> impl IntoResponse {
    let stats = service.compute().await;
    (StatusCode::OK, Json(stats)).into_response()
}
