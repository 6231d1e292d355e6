// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含系统的核心业务服务：
/// - 提取服务（extraction_service）：从HTML中提取结构化内容
/// - LLM服务（llm_service）：调用LLM进行语义分析
/// - 抓取服务（scrape_service）：编排单次抓取请求的完整流程
/// - 统计服务（stats_service）：计算聚合统计数据
pub mod extraction_service;
pub mod llm_service;
pub mod scrape_service;
pub mod stats_service;
