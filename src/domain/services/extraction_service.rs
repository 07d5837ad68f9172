// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::GateError;
use scraper::{Html, Node, Selector};

/// 文本不可见的元素
const INVISIBLE_ELEMENTS: [&str; 4] = ["script", "style", "template", "noscript"];

/// 标签提取规则
///
/// 一个已编译的CSS选择器，原始文本保留用于日志
#[derive(Debug, Clone)]
pub struct TagRule {
    pub name: String,
    selector: Selector,
}

impl TagRule {
    /// 编译标签选择器
    pub fn parse(name: &str) -> Result<Self, GateError> {
        let selector = Selector::parse(name)
            .map_err(|e| GateError::InvalidTag(format!("{}: {}", name, e)))?;
        Ok(Self {
            name: name.to_string(),
            selector,
        })
    }
}

/// 提取服务
///
/// 负责从已渲染的 HTML 中取出需要检查的纯文本
pub struct ExtractionService;

impl ExtractionService {
    /// 提取文本
    ///
    /// `tags` 为空时返回整页可见文本；否则按标签顺序、
    /// 每个标签内按文档顺序收集元素文本，以单个空格连接。
    /// 畸形 HTML 尽力解析，不会报错。
    pub fn extract(markup: &str, tags: &[TagRule]) -> String {
        let document = Html::parse_document(markup);

        if tags.is_empty() {
            return Self::visible_text(&document);
        }

        tags.iter()
            .flat_map(|tag| {
                document
                    .select(&tag.selector)
                    .map(|element| element.text().collect::<String>())
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// 整个文档的文本节点按顺序拼接，跳过不可见元素内部的文本
    fn visible_text(document: &Html) -> String {
        document
            .tree
            .root()
            .descendants()
            .filter_map(|node| match node.value() {
                Node::Text(text) => Some((node, text)),
                _ => None,
            })
            .filter(|(node, _)| {
                !node.ancestors().any(|ancestor| {
                    ancestor
                        .value()
                        .as_element()
                        .is_some_and(|el| INVISIBLE_ELEMENTS.contains(&el.name()))
                })
            })
            .map(|(_, text)| &**text)
            .collect()
    }
}

#[cfg(test)]
#[path = "extraction_service_test.rs"]
mod tests;
