// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;

use crate::domain::services::scrape_service::ScrapeService;
use crate::domain::services::stats_service::StatsService;
use crate::presentation::handlers::{scrape_handler, stats_handler};

/// 创建应用路由
///
/// # 参数
///
/// * `scrape_service` - 抓取服务
/// * `stats_service` - 统计服务
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(scrape_service: Arc<ScrapeService>, stats_service: Arc<StatsService>) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let api_routes = Router::new()
        .route("/api/scrape", post(scrape_handler::create_scrape))
        .route("/api/stats", get(stats_handler::get_stats))
        .layer(Extension(scrape_service))
        .layer(Extension(stats_service));

    Router::new().merge(public_routes).merge(api_routes)
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
