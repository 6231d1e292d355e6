// Copyright (c) 2026 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::{ElementRef, Html, Selector};

use crate::domain::models::scrape_result::{ImageItem, LinkItem, NO_DESCRIPTION, NO_TITLE};
use crate::utils::text_processing::{collapse_whitespace, word_count};

/// 标题展示列表上限
pub const HEADINGS_CAP: usize = 20;
/// 链接展示列表上限
pub const LINKS_CAP: usize = 50;
/// 图片展示列表上限
pub const IMAGES_CAP: usize = 30;

/// 提取前整体丢弃的非内容元素
const EXCLUDED_TAGS: [&str; 4] = ["script", "style", "noscript", "iframe"];

/// 提取结果
///
/// 展示列表（headings/links/images）按各自上限截断，
/// 未截断的总数单独记录在 link_count / image_count 中
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedContent {
    /// 页面标题，缺失时为占位文本
    pub title: String,
    /// 页面描述，缺失时为占位文本
    pub description: String,
    /// 正文可见文本，空白已折叠
    pub body_text: String,
    /// 正文单词数，空正文为0
    pub word_count: usize,
    /// 段落文本列表，文档顺序，未截断
    pub paragraphs: Vec<String>,
    /// 标题文本列表（h1-h6），文档顺序，最多20条
    pub headings: Vec<String>,
    /// 链接列表，文档顺序，最多50条
    pub links: Vec<LinkItem>,
    /// 图片列表，文档顺序，最多30条
    pub images: Vec<ImageItem>,
    /// 文档内链接总数（未截断）
    pub link_count: usize,
    /// 文档内图片总数（未截断）
    pub image_count: usize,
}

/// 提取服务
///
/// 负责从HTML内容中提取结构化数据。纯函数，无任何I/O；
/// 解析器以宽松模式工作，畸形标记不会中止提取
pub struct ExtractionService;

impl ExtractionService {
    /// 提取数据
    ///
    /// # 参数
    ///
    /// * `html_content` - 原始HTML文本
    ///
    /// # 返回值
    ///
    /// 返回提取到的结构化内容
    pub fn extract(html_content: &str) -> ExtractedContent {
        let document = Html::parse_document(html_content);

        let title = Self::extract_title(&document);
        let description = Self::extract_description(&document);

        let body_text = Self::extract_body_text(&document);
        let words = word_count(&body_text);

        let paragraph_sel = Selector::parse("p").unwrap();
        let paragraphs: Vec<String> = document
            .select(&paragraph_sel)
            .map(|el| Self::visible_text(el))
            .collect();

        let heading_sel = Selector::parse("h1, h2, h3, h4, h5, h6").unwrap();
        let headings: Vec<String> = document
            .select(&heading_sel)
            .map(|el| Self::visible_text(el))
            .take(HEADINGS_CAP)
            .collect();

        let link_sel = Selector::parse("a").unwrap();
        let mut links = Vec::new();
        let mut link_count = 0usize;
        for el in document.select(&link_sel) {
            link_count += 1;
            if links.len() < LINKS_CAP {
                links.push(LinkItem {
                    text: Self::visible_text(el),
                    href: el.value().attr("href").map(|s| s.to_string()),
                });
            }
        }

        let image_sel = Selector::parse("img").unwrap();
        let mut images = Vec::new();
        let mut image_count = 0usize;
        for el in document.select(&image_sel) {
            image_count += 1;
            if images.len() < IMAGES_CAP {
                images.push(ImageItem {
                    src: el.value().attr("src").map(|s| s.to_string()),
                    alt: el.value().attr("alt").map(|s| s.to_string()),
                });
            }
        }

        ExtractedContent {
            title,
            description,
            body_text,
            word_count: words,
            paragraphs,
            headings,
            links,
            images,
            link_count,
            image_count,
        }
    }

    /// 提取页面标题
    ///
    /// 优先使用 title 元素，其次使用第一个 h1，均为空时返回占位文本
    fn extract_title(document: &Html) -> String {
        let title_sel = Selector::parse("title").unwrap();
        if let Some(el) = document.select(&title_sel).next() {
            let text = Self::visible_text(el);
            if !text.is_empty() {
                return text;
            }
        }

        let h1_sel = Selector::parse("h1").unwrap();
        if let Some(el) = document.select(&h1_sel).next() {
            let text = Self::visible_text(el);
            if !text.is_empty() {
                return text;
            }
        }

        NO_TITLE.to_string()
    }

    /// 提取页面描述
    ///
    /// 优先使用 meta[name=description]，其次使用
    /// meta[property=og:description]，均为空时返回占位文本
    fn extract_description(document: &Html) -> String {
        let selectors = [
            r#"meta[name="description"]"#,
            r#"meta[property="og:description"]"#,
        ];

        for sel in selectors {
            let selector = Selector::parse(sel).unwrap();
            if let Some(el) = document.select(&selector).next() {
                if let Some(content) = el.value().attr("content") {
                    let trimmed = content.trim();
                    if !trimmed.is_empty() {
                        return trimmed.to_string();
                    }
                }
            }
        }

        NO_DESCRIPTION.to_string()
    }

    /// 提取正文可见文本
    ///
    /// 跳过非内容元素子树，折叠空白并去除首尾空白
    fn extract_body_text(document: &Html) -> String {
        let body_sel = Selector::parse("body").unwrap();
        match document.select(&body_sel).next() {
            Some(body) => Self::visible_text(body),
            None => Self::visible_text(document.root_element()),
        }
    }

    /// 收集元素的可见文本
    ///
    /// script/style/noscript/iframe 子树的文本不会出现在结果中
    fn visible_text(element: ElementRef) -> String {
        let mut raw = String::new();
        Self::collect_text(element, &mut raw);
        collapse_whitespace(&raw)
    }

    fn collect_text(element: ElementRef, out: &mut String) {
        for child in element.children() {
            if let Some(el) = ElementRef::wrap(child) {
                if EXCLUDED_TAGS.contains(&el.value().name()) {
                    continue;
                }
                Self::collect_text(el, out);
            } else if let Some(text) = child.value().as_text() {
                out.push_str(text);
            }
        }
    }
}
