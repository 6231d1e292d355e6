// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::integration::helpers;

const EXAMPLE_PAGE: &str = r#"
    <html>
        <head><title>Example</title></head>
        <body>
            <h1>Example</h1>
            <p>First paragraph of text.</p>
            <p>Second paragraph of text.</p>
            <a href="/one">one</a>
            <a href="/two">two</a>
            <a href="/three">three</a>
        </body>
    </html>
"#;

async fn serve_page(body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
        .mount(&server)
        .await;
    server
}

/// 非法URL测试
///
/// 验证非法URL返回400和固定错误体
#[tokio::test]
async fn invalid_url_returns_400() {
    let app = helpers::test_app().await;

    let (status, body) = helpers::post_json(
        app,
        "/api/scrape",
        json!({ "url": "not a url", "mode": "basic" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid URL provided" }));
}

/// 基础抓取测试
///
/// 验证提取到的标题和各项计数与页面内容一致
#[tokio::test]
async fn basic_scrape_extracts_page_fields() {
    let server = serve_page(EXAMPLE_PAGE).await;
    let app = helpers::test_app().await;

    let (status, body) = helpers::post_json(
        app,
        "/api/scrape",
        json!({ "url": format!("{}/page", server.uri()), "mode": "basic" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["title"], "Example");
    assert_eq!(body["metadata"]["paragraphCount"], 2);
    assert_eq!(body["metadata"]["imageCount"], 0);
    assert_eq!(body["metadata"]["linkCount"], 3);
    assert!(body["metadata"]["scrapeDuration"].as_u64().is_some());
    // The store assigned the identifier
    let id = body["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert!(!id.starts_with("local-"));
    // Basic mode never calls the analyzer
    assert!(body.get("aiAnalysis").is_none());
}

/// 列表截断测试
///
/// 验证超大页面的展示列表被截断而总数保持完整
#[tokio::test]
async fn oversized_page_lists_are_capped() {
    let mut markup = String::from("<html><head><title>Big</title></head><body>");
    for i in 0..60 {
        markup.push_str(&format!("<a href=\"/p/{i}\">link {i}</a>"));
    }
    markup.push_str(&"<p>word </p>".repeat(40));
    markup.push_str("</body></html>");

    let server = serve_page(&markup).await;
    let app = helpers::test_app().await;

    let (status, body) = helpers::post_json(
        app,
        "/api/scrape",
        json!({ "url": format!("{}/page", server.uri()), "mode": "basic" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["metadata"]["linkCount"], 60);
    assert_eq!(body["extractedData"]["links"].as_array().unwrap().len(), 50);
    assert!(body["content"].as_str().unwrap().chars().count() <= 5000);
}

/// 分析失败吸收测试
///
/// 验证LLM抛错时仍返回200，分析字段为占位文本
#[tokio::test]
async fn nerd_mode_with_throwing_analyzer_still_returns_200() {
    let server = serve_page(EXAMPLE_PAGE).await;
    let app = helpers::test_app_with_llm(Arc::new(helpers::ThrowingLlm)).await;

    let (status, body) = helpers::post_json(
        app,
        "/api/scrape",
        json!({ "url": format!("{}/page", server.uri()), "mode": "nerd" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(
        body["aiAnalysis"],
        "AI analysis temporarily unavailable. Please try again."
    );
}

/// 密钥缺失降级测试
///
/// 验证未配置API密钥时nerd模式返回固定降级消息
#[tokio::test]
async fn nerd_mode_without_api_key_degrades() {
    let server = serve_page(EXAMPLE_PAGE).await;
    let app = helpers::test_app().await;

    let (status, body) = helpers::post_json(
        app,
        "/api/scrape",
        json!({ "url": format!("{}/page", server.uri()), "mode": "nerd" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["aiAnalysis"], "LLM API key is missing.");
}

/// 抓取失败测试
///
/// 验证目标返回非2xx时响应为500的失败记录，
/// 计数为0但耗时字段仍然存在
#[tokio::test]
async fn upstream_error_returns_error_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let app = helpers::test_app().await;

    let (status, body) = helpers::post_json(
        app,
        "/api/scrape",
        json!({ "url": format!("{}/page", server.uri()), "mode": "basic" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    assert!(body["errorMessage"].as_str().unwrap().contains("503"));
    assert_eq!(body["metadata"]["wordCount"], 0);
    assert_eq!(body["metadata"]["linkCount"], 0);
    assert!(body["metadata"]["scrapeDuration"].as_u64().is_some());
}

/// 自定义提示词测试
///
/// 验证自定义提示词不会改变响应形状
#[tokio::test]
async fn custom_prompt_is_accepted() {
    let server = serve_page(EXAMPLE_PAGE).await;
    let app = helpers::test_app().await;

    let (status, body) = helpers::post_json(
        app,
        "/api/scrape",
        json!({
            "url": format!("{}/page", server.uri()),
            "mode": "nerd",
            "customPrompt": "Summarize this page in one sentence."
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["aiAnalysis"].as_str().is_some());
}
