// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 页面实体
///
/// 由站点构建产出的一个已渲染单元。本组件只读取页面，
/// 不拥有也不修改它。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// 页面URL，例如 `/about/`
    pub url: String,
    /// 文件扩展名，带前导点，例如 `.html`；没有扩展名时为空
    pub extension: String,
    /// 渲染后的标记内容
    pub rendered_markup: String,
}

impl Page {
    /// 创建一个新的页面
    ///
    /// # 参数
    ///
    /// * `url` - 页面URL
    /// * `extension` - 文件扩展名，带或不带前导点均可
    /// * `rendered_markup` - 渲染后的HTML
    pub fn new(
        url: impl Into<String>,
        extension: impl Into<String>,
        rendered_markup: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            extension: normalize_extension(&extension.into()),
            rendered_markup: rendered_markup.into(),
        }
    }

    /// 扩展名是否等于给定值（忽略大小写与前导点）
    pub fn has_extension(&self, ext: &str) -> bool {
        normalize_extension(&self.extension) == normalize_extension(ext)
    }
}

/// 规范化扩展名为小写并带前导点
fn normalize_extension(ext: &str) -> String {
    let trimmed = ext.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(".{}", trimmed.to_ascii_lowercase())
    }
}
