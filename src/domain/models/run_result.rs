// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::finding::Finding;

/// 因检查失败而被跳过的页面（仅在跳过策略下出现）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPage {
    /// 页面URL
    pub url: String,
    /// 失败原因
    pub reason: String,
}

/// 运行结果
///
/// 在运行开始时为空，按页面处理顺序追加过滤后的结果，
/// 运行结束时检查一次以决定退出状态。不会被持久化。
#[derive(Debug, Default, Clone)]
pub struct RunResult {
    /// 所有页面上保留下来的结果
    pub findings: Vec<Finding>,
    /// 已检查的页面数量
    pub pages_checked: usize,
    /// 被跳过的页面
    pub skipped: Vec<SkippedPage>,
}

impl RunResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一个已检查页面的结果
    pub fn record(&mut self, findings: Vec<Finding>) {
        self.pages_checked += 1;
        self.findings.extend(findings);
    }

    /// 记录一个被跳过的页面
    pub fn record_skip(&mut self, url: impl Into<String>, reason: impl Into<String>) {
        self.skipped.push(SkippedPage {
            url: url.into(),
            reason: reason.into(),
        });
    }

    /// 根据累积结果决定运行结局
    pub fn outcome(&self) -> RunOutcome {
        if !self.findings.is_empty() {
            RunOutcome::Failed
        } else if !self.skipped.is_empty() {
            RunOutcome::Incomplete
        } else {
            RunOutcome::Passed
        }
    }
}

/// 运行结局
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// 没有任何结果
    Passed,
    /// 存在拼写/语法问题
    Failed,
    /// 没有结果，但有页面未能检查
    Incomplete,
}

impl RunOutcome {
    /// 进程退出码
    pub fn exit_code(self) -> u8 {
        match self {
            RunOutcome::Passed => 0,
            RunOutcome::Failed => 1,
            RunOutcome::Incomplete => 2,
        }
    }
}
