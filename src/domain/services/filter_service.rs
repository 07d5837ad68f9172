// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::Finding;
use std::collections::HashSet;

/// 纯空白/格式噪声规则
pub const WHITESPACE_RULE_ID: &str = "WHITESPACE_RULE";

/// 允许词过滤配置
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    /// 是否启用
    pub enabled: bool,
    /// 小写的允许词
    words: HashSet<String>,
}

impl AllowList {
    pub fn new<I, S>(enabled: bool, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            enabled,
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// 该结果的被标记单词是否被允许
    pub fn allows(&self, finding: &Finding) -> bool {
        self.enabled && self.words.contains(&finding.word.to_lowercase())
    }
}

/// 结果过滤服务
///
/// 两个阶段：先丢弃空白噪声规则，再按允许词过滤
pub struct FilterService;

impl FilterService {
    /// 过滤结果，保持原有顺序
    pub fn filter(findings: Vec<Finding>, allow_list: &AllowList) -> Vec<Finding> {
        Self::exclude_allowed(Self::drop_noise(findings), allow_list)
    }

    /// 丢弃空白噪声规则
    pub fn drop_noise(findings: Vec<Finding>) -> Vec<Finding> {
        findings
            .into_iter()
            .filter(|f| f.rule_id != WHITESPACE_RULE_ID)
            .collect()
    }

    /// 丢弃被标记单词在允许列表中的结果
    pub fn exclude_allowed(findings: Vec<Finding>, allow_list: &AllowList) -> Vec<Finding> {
        if !allow_list.enabled || allow_list.words.is_empty() {
            return findings;
        }
        findings
            .into_iter()
            .filter(|f| !allow_list.allows(f))
            .collect()
    }
}
