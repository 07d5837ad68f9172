// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::Finding;
use crate::engines::traits::{CheckerEngine, EngineError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

/// 脚本化检查引擎
///
/// 不启动任何进程的内存实现：文本包含触发词时返回预设结果，
/// 并记录收到的每段文本，便于在测试中替换真实引擎。
#[derive(Default)]
pub struct ScriptedEngine {
    rules: Vec<(String, Finding)>,
    fail_start: bool,
    fail_on: Option<String>,
    started: bool,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// 文本包含 `trigger` 时返回 `finding`
    pub fn with_finding(mut self, trigger: impl Into<String>, finding: Finding) -> Self {
        self.rules.push((trigger.into(), finding));
        self
    }

    /// 让 `start` 失败
    pub fn failing_start(mut self) -> Self {
        self.fail_start = true;
        self
    }

    /// 文本包含 `trigger` 时让 `check` 失败
    pub fn failing_on(mut self, trigger: impl Into<String>) -> Self {
        self.fail_on = Some(trigger.into());
        self
    }

    /// 收到的文本记录，可在引擎被移动后继续读取
    pub fn calls(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl CheckerEngine for ScriptedEngine {
    async fn start(&mut self) -> Result<(), EngineError> {
        if self.fail_start {
            return Err(EngineError::Other("scripted start failure".to_string()));
        }
        self.started = true;
        Ok(())
    }

    async fn check(&self, text: &str) -> Result<Vec<Finding>, EngineError> {
        if !self.started {
            return Err(EngineError::NotStarted);
        }
        self.calls.lock().push(text.to_string());

        if let Some(trigger) = &self.fail_on {
            if text.contains(trigger.as_str()) {
                return Err(EngineError::BadResponse("scripted check failure".to_string()));
            }
        }

        Ok(self
            .rules
            .iter()
            .filter(|(trigger, _)| text.contains(trigger.as_str()))
            .map(|(_, finding)| finding.clone())
            .collect())
    }

    async fn stop(&mut self) -> Result<(), EngineError> {
        self.started = false;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
