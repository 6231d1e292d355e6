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

use scraprs::config::settings::Settings;
use scraprs::domain::services::llm_service::LLMService;
use scraprs::domain::services::scrape_service::ScrapeService;
use scraprs::domain::services::stats_service::StatsService;
use scraprs::engines::fetch_engine::FetchEngine;
use scraprs::infrastructure::database::connection;
use scraprs::infrastructure::repositories::scrape_result_repo_impl::ScrapeResultRepositoryImpl;
use scraprs::presentation::routes;
use scraprs::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use migration::{Migrator, MigratorTrait};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting scraprs...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    // Run database migrations
    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Initialize components
    let result_repo = Arc::new(ScrapeResultRepositoryImpl::new(db.clone()));
    let fetch_engine = Arc::new(FetchEngine::new(&settings.fetcher));
    let llm_service = Arc::new(LLMService::new(&settings.llm));
    if settings.llm.api_key.is_none() {
        info!("LLM API key not configured, analysis will degrade gracefully");
    }

    let scrape_service = Arc::new(ScrapeService::new(
        fetch_engine,
        llm_service,
        result_repo.clone(),
    ));
    let stats_service = Arc::new(StatsService::new(result_repo));

    // 5. Start HTTP server
    let app = routes::routes(scrape_service, stats_service).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
