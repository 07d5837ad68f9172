// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::CheckErrorPolicy;
use crate::domain::models::{CheckConfiguration, Finding, Page, RunResult};
use crate::domain::services::extraction_service::ExtractionService;
use crate::domain::services::filter_service::FilterService;
use crate::domain::services::report_service::ReportService;
use crate::domain::services::selector_service::SelectorService;
use crate::engines::traits::{CheckerEngine, EngineError};
use crate::utils::errors::GateError;
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info, warn};

/// 拼写检查用例
///
/// 启动引擎一次，然后对每个选中的页面依次执行
/// 提取 → 检查 → 过滤 → 报告，最后根据累积结果决定结局。
pub struct SpellcheckUseCase<E: CheckerEngine> {
    engine: E,
    config: CheckConfiguration,
    check_timeout: Option<Duration>,
    error_policy: CheckErrorPolicy,
}

impl<E: CheckerEngine> SpellcheckUseCase<E> {
    pub fn new(engine: E, config: CheckConfiguration) -> Self {
        Self {
            engine,
            config,
            check_timeout: None,
            error_policy: CheckErrorPolicy::Abort,
        }
    }

    /// 单次检查的超时时间
    pub fn with_check_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.check_timeout = timeout;
        self
    }

    /// 单页检查失败时的处理策略
    pub fn with_error_policy(mut self, policy: CheckErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// 执行一次完整的检查运行
    ///
    /// # 返回值
    ///
    /// * `Ok(RunResult)` - 运行结束，结局见 `RunResult::outcome`
    /// * `Err(GateError)` - 引擎启动失败或检查失败（中止策略下）
    pub async fn execute<W: Write>(
        &mut self,
        pages: &[Page],
        reporter: &mut ReportService<W>,
    ) -> Result<RunResult, GateError> {
        info!(engine = self.engine.name(), "Starting checker engine");
        self.engine.start().await.map_err(GateError::EngineStartup)?;

        let checked = self.check_pages(pages, reporter).await;

        if let Err(e) = self.engine.stop().await {
            warn!(error = %e, "Failed to stop checker engine");
        }

        let result = checked?;
        reporter.finish(&result)?;
        info!(
            pages = result.pages_checked,
            findings = result.findings.len(),
            skipped = result.skipped.len(),
            "Spell check finished"
        );
        Ok(result)
    }

    async fn check_pages<W: Write>(
        &self,
        pages: &[Page],
        reporter: &mut ReportService<W>,
    ) -> Result<RunResult, GateError> {
        let selected = SelectorService::select(pages, &self.config.url_pattern);
        debug!(total = pages.len(), selected = selected.len(), "Pages selected");

        let mut result = RunResult::new();
        for page in selected {
            reporter.page_started(&page.url)?;
            let text = ExtractionService::extract(&page.rendered_markup, &self.config.tags);
            debug!(url = %page.url, chars = text.len(), "Checking page");

            match self.check_text(&text).await {
                Ok(findings) => {
                    let reported = findings.len();
                    let kept = FilterService::filter(findings, &self.config.allow_list);
                    debug!(url = %page.url, reported, kept = kept.len(), "Page checked");
                    for finding in &kept {
                        reporter.finding(finding)?;
                    }
                    result.record(kept);
                }
                Err(source) => match self.error_policy {
                    CheckErrorPolicy::Abort => {
                        return Err(GateError::EngineCall {
                            url: page.url.clone(),
                            source,
                        });
                    }
                    CheckErrorPolicy::Skip => {
                        warn!(url = %page.url, error = %source, "Skipping page");
                        let reason = source.to_string();
                        reporter.page_skipped(&page.url, &reason)?;
                        result.record_skip(page.url.clone(), reason);
                    }
                },
            }
        }
        Ok(result)
    }

    async fn check_text(&self, text: &str) -> Result<Vec<Finding>, EngineError> {
        match self.check_timeout {
            Some(limit) => tokio::time::timeout(limit, self.engine.check(text))
                .await
                .map_err(|_| EngineError::Timeout)?,
            None => self.engine.check(text).await,
        }
    }
}

#[cfg(test)]
#[path = "spellcheck_use_case_test.rs"]
mod tests;
