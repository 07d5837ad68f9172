// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::Page;
use regex::Regex;
use std::collections::HashSet;

/// 永远不检查的扩展名：样式表、脚本和脚本预编译源文件
pub const REJECTED_EXTENSIONS: [&str; 3] = [".css", ".js", ".coffee"];

/// 页面选择服务
pub struct SelectorService;

impl SelectorService {
    /// 选出需要检查的页面
    ///
    /// URL 需匹配 `url_pattern`（非锚定匹配），且扩展名不在拒绝集合中。
    /// 输出保持输入顺序；同一URL只保留第一次出现。
    pub fn select<'a>(pages: &'a [Page], url_pattern: &Regex) -> Vec<&'a Page> {
        let mut seen = HashSet::new();
        pages
            .iter()
            .filter(|page| url_pattern.is_match(&page.url))
            .filter(|page| !Self::is_rejected(page))
            .filter(|page| seen.insert(page.url.as_str()))
            .collect()
    }

    /// 扩展名是否在拒绝集合中
    pub fn is_rejected(page: &Page) -> bool {
        REJECTED_EXTENSIONS.iter().any(|ext| page.has_extension(ext))
    }
}
