// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::Page;
use crate::utils::errors::GateError;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// 目录索引文件，URL中折叠为所在目录
const INDEX_FILE: &str = "index.html";

/// 读取已渲染站点目录中的所有页面
///
/// 按文件名排序递归遍历，保证页面顺序稳定。
/// 不是 UTF-8 的文件（图片、字体等）不属于渲染后的标记，直接跳过。
pub fn load_pages(root: &Path) -> Result<Vec<Page>, GateError> {
    if !root.is_dir() {
        return Err(GateError::Site(format!(
            "{} 不存在或不是目录",
            root.display()
        )));
    }

    let mut pages = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| GateError::Site(e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path
            .strip_prefix(root)
            .map_err(|e| GateError::Site(e.to_string()))?;

        let bytes = std::fs::read(path)
            .map_err(|e| GateError::Site(format!("{}: {}", path.display(), e)))?;
        let markup = match String::from_utf8(bytes) {
            Ok(markup) => markup,
            Err(_) => {
                debug!(path = %path.display(), "Skipping non UTF-8 file");
                continue;
            }
        };

        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();

        pages.push(Page::new(url_for(relative), extension, markup));
    }

    info!(root = %root.display(), pages = pages.len(), "Site loaded");
    Ok(pages)
}

/// 由相对路径得到页面URL
///
/// `about/index.html` → `/about/`，`index.html` → `/`，其余原样加前导斜杠
pub fn url_for(relative: &Path) -> String {
    let segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    match segments.split_last() {
        Some((last, dirs)) if last == INDEX_FILE => {
            if dirs.is_empty() {
                "/".to_string()
            } else {
                format!("/{}/", dirs.join("/"))
            }
        }
        _ => format!("/{}", segments.join("/")),
    }
}
