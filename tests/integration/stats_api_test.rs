// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::integration::helpers;

/// 空存储统计测试
///
/// 验证空存储返回全零统计
#[tokio::test]
async fn empty_store_returns_zeroed_stats() {
    let app = helpers::test_app().await;

    let (status, body) = helpers::get_json(app, "/api/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalScrapes"], 0);
    assert_eq!(body["successfulScrapes"], 0);
    assert_eq!(body["failedScrapes"], 0);
    assert_eq!(body["averageDuration"], 0.0);
    assert_eq!(body["totalDataScraped"], 0);
    assert_eq!(body["recentScrapes"], json!([]));
}

/// 统计汇总测试
///
/// 验证一次成功和一次失败的抓取被正确计入窗口
#[tokio::test]
async fn stats_reflect_recorded_scrapes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><head><title>Ok</title></head><body><p>three words here</p></body></html>",
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/down"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let app = helpers::test_app().await;

    let (status, _) = helpers::post_json(
        app.clone(),
        "/api/scrape",
        json!({ "url": format!("{}/ok", server.uri()), "mode": "basic" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = helpers::post_json(
        app.clone(),
        "/api/scrape",
        json!({ "url": format!("{}/down", server.uri()), "mode": "basic" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, body) = helpers::get_json(app, "/api/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalScrapes"], 2);
    assert_eq!(body["successfulScrapes"], 1);
    assert_eq!(body["failedScrapes"], 1);
    // Word totals only accumulate over successful scrapes
    assert_eq!(body["totalDataScraped"], 3);
    assert_eq!(body["recentScrapes"].as_array().unwrap().len(), 2);
}
