// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 引擎在单个替换字符串中合并多个候选项时使用的分隔符
pub const REPLACEMENT_SEPARATOR: char = '#';

/// 检查结果实体
///
/// 检查引擎报告的一个问题。结果没有身份标识，
/// 不同页面上的相同结果都会被保留。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// 规则ID，例如 `MORFOLOGIK_RULE_EN_US`
    pub rule_id: String,
    /// 规则分类名称
    pub category: String,
    /// 面向用户的描述
    pub message: String,
    /// 问题所在的上下文片段
    pub context: String,
    /// 被标记的原文（用于允许词过滤），可能为空
    pub word: String,
    /// 替换建议，按引擎给出的顺序
    pub replacements: Vec<String>,
}

impl Finding {
    /// 拆分引擎以单个字符串返回的候选项
    pub fn split_replacements(joined: &str) -> Vec<String> {
        joined
            .split(REPLACEMENT_SEPARATOR)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// 展示用的替换建议，候选项原样以单个空格连接
    pub fn display_replacements(&self) -> String {
        self.replacements.join(" ")
    }
}
