// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 文本处理模块
//!
//! 提供抓取内容的文本规范化功能，包括：
//! - 空白字符折叠
//! - 单词计数
//! - 按字符安全截断

/// 将文本中的连续空白（含换行）折叠为单个空格并去除首尾空白
///
/// # 参数
///
/// * `text` - 输入文本
///
/// # 返回值
///
/// 规范化后的文本
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 统计文本中以空白分隔的单词数量
///
/// 空文本或纯空白文本返回0
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// 将文本截断到最多 `max_chars` 个字符
///
/// 截断按字符边界进行，不会切断多字节字符
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
