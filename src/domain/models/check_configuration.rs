// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::CheckSettings;
use crate::domain::services::extraction_service::TagRule;
use crate::domain::services::filter_service::AllowList;
use crate::utils::errors::GateError;
use regex::Regex;

/// 检查配置
///
/// 运行期间不可变。在启动检查引擎之前编译，
/// 无效的正则或标签选择器会让运行直接失败。
#[derive(Debug, Clone)]
pub struct CheckConfiguration {
    /// URL匹配模式
    pub url_pattern: Regex,
    /// 需要检查的标签，为空时检查整页
    pub tags: Vec<TagRule>,
    /// 允许词过滤
    pub allow_list: AllowList,
}

impl CheckConfiguration {
    pub fn new<S: AsRef<str>>(
        url_pattern: &str,
        tags: &[S],
        allowed_words: &[S],
        allow_list_enabled: bool,
    ) -> Result<Self, GateError> {
        Ok(Self {
            url_pattern: Regex::new(url_pattern)?,
            tags: tags
                .iter()
                .map(|tag| TagRule::parse(tag.as_ref()))
                .collect::<Result<_, _>>()?,
            allow_list: AllowList::new(allow_list_enabled, allowed_words),
        })
    }

    /// 从配置设置编译
    pub fn from_settings(settings: &CheckSettings) -> Result<Self, GateError> {
        Self::new(
            &settings.url_pattern,
            settings.tags.as_slice(),
            settings.allowed_words.as_slice(),
            settings.allow_list_enabled,
        )
    }
}
