// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::Result;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use migration::MigratorTrait;
use sea_orm::Database;
use std::sync::Arc;
use tower::util::ServiceExt;

use scraprs::config::settings::FetcherSettings;
use scraprs::domain::services::llm_service::{LLMService, LLMServiceTrait};
use scraprs::domain::services::scrape_service::ScrapeService;
use scraprs::domain::services::stats_service::StatsService;
use scraprs::engines::fetch_engine::FetchEngine;
use scraprs::infrastructure::repositories::scrape_result_repo_impl::ScrapeResultRepositoryImpl;
use scraprs::presentation::routes;

/// 总是失败的LLM测试替身
pub struct ThrowingLlm;

#[async_trait]
impl LLMServiceTrait for ThrowingLlm {
    async fn analyze(&self, _text: &str, _prompt: &str) -> Result<String> {
        Err(anyhow::anyhow!("LLM provider unavailable"))
    }
}

/// 构建带指定LLM替身的测试应用
///
/// 使用内存SQLite数据库并运行全部迁移
pub async fn test_app_with_llm(llm: Arc<dyn LLMServiceTrait>) -> Router {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    let db = Arc::new(db);
    migration::Migrator::up(db.as_ref(), None).await.unwrap();

    let result_repo = Arc::new(ScrapeResultRepositoryImpl::new(db));
    let fetcher = Arc::new(FetchEngine::new(&FetcherSettings {
        timeout: 10,
        user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
    }));

    let scrape_service = Arc::new(ScrapeService::new(fetcher, llm, result_repo.clone()));
    let stats_service = Arc::new(StatsService::new(result_repo));

    routes::routes(scrape_service, stats_service)
}

/// 构建默认测试应用
///
/// LLM未配置API密钥，分析路径走降级分支
pub async fn test_app() -> Router {
    let llm = Arc::new(LLMService::new_with_config(
        None,
        "gpt-3.5-turbo".to_string(),
        "http://127.0.0.1:1/v1".to_string(),
    ));
    test_app_with_llm(llm).await
}

/// 发送JSON POST请求并解析JSON响应
pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

/// 发送GET请求并解析JSON响应
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}
