// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::{Finding, RunOutcome, RunResult};
use std::io::{self, Write};

/// 存在拼写问题时的结束语
pub const FAILURE_MESSAGE: &str = "Build failed. There are spelling errors.";

/// 报告服务
///
/// 把每个页面的状态行和每个结果写到输出，运行结束时给出结局
pub struct ReportService<W: Write> {
    out: W,
}

impl<W: Write> ReportService<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// 页面开始检查前的状态行
    pub fn page_started(&mut self, url: &str) -> io::Result<()> {
        writeln!(self.out, "Running spell checker for {}", url)
    }

    /// 单个结果的报告块
    pub fn finding(&mut self, finding: &Finding) -> io::Result<()> {
        write!(self.out, "{}", Self::format_finding(finding))
    }

    /// 跳过页面的提示行
    pub fn page_skipped(&mut self, url: &str, reason: &str) -> io::Result<()> {
        writeln!(self.out, "Skipped {}: {}", url, reason)
    }

    /// 根据累积结果输出结束语并返回结局
    pub fn finish(&mut self, result: &RunResult) -> io::Result<RunOutcome> {
        let outcome = result.outcome();
        match outcome {
            RunOutcome::Passed => {}
            RunOutcome::Failed => writeln!(self.out, "{}", FAILURE_MESSAGE)?,
            RunOutcome::Incomplete => writeln!(
                self.out,
                "Build incomplete. {} page(s) could not be checked.",
                result.skipped.len()
            )?,
        }
        self.out.flush()?;
        Ok(outcome)
    }

    /// 取回底层输出
    pub fn into_inner(self) -> W {
        self.out
    }

    /// 格式化结果块
    pub fn format_finding(finding: &Finding) -> String {
        format!(
            "Category: {}\nMessage: {}\nContext: {}\nReplacements: {}\n",
            finding.category,
            finding.message,
            finding.context,
            finding.display_replacements()
        )
    }
}
