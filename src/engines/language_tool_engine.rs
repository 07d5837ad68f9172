// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::EngineSettings;
use crate::domain::models::Finding;
use crate::engines::traits::{CheckerEngine, EngineError};
use crate::utils::port_sniffer::PortSniffer;
use async_trait::async_trait;
use serde::Deserialize;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::{Child, Command};
use tracing::{debug, info, warn};
use url::Url;

/// 就绪探测间隔
const READY_POLL_INTERVAL: Duration = Duration::from_millis(250);
/// 单次就绪探测的超时
const READY_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// LanguageTool 检查引擎
///
/// 通过 HTTP API 与 LanguageTool 服务通信。未配置服务地址时，
/// 在空闲端口上启动一个本地服务进程，运行结束时结束它。
pub struct LanguageToolEngine {
    settings: EngineSettings,
    client: reqwest::Client,
    base_url: Option<Url>,
    child: Option<Child>,
}

impl LanguageToolEngine {
    /// 创建引擎，尚未启动
    pub fn new(settings: EngineSettings) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("spellgate/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            settings,
            client,
            base_url: None,
            child: None,
        })
    }

    /// 服务地址（启动后可用）
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    fn endpoint(base: &Url, path: &str) -> Result<Url, EngineError> {
        base.join(path)
            .map_err(|e| EngineError::Other(format!("Invalid engine URL: {}", e)))
    }

    /// 启动本地服务进程，返回其地址
    fn spawn_server(&mut self) -> Result<Url, EngineError> {
        let port = PortSniffer::find_available_port(self.settings.port)
            .map_err(|e| EngineError::Other(e.to_string()))?;
        let args = substitute_port(&self.settings.args, port);

        info!(program = %self.settings.program, ?args, port, "Starting LanguageTool server");

        let child = Command::new(&self.settings.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(EngineError::Spawn)?;
        self.child = Some(child);

        Url::parse(&format!("http://127.0.0.1:{}/", port))
            .map_err(|e| EngineError::Other(e.to_string()))
    }

    /// 轮询服务直到可以接受请求
    async fn wait_until_ready(&mut self, base: &Url) -> Result<(), EngineError> {
        let probe = Self::endpoint(base, "v2/languages")?;
        let timeout = Duration::from_secs(self.settings.startup_timeout_secs);
        let start = Instant::now();

        loop {
            if let Some(child) = self.child.as_mut() {
                if let Some(status) = child.try_wait().map_err(EngineError::Spawn)? {
                    return Err(EngineError::Exited(status.to_string()));
                }
            }

            match self
                .client
                .get(probe.clone())
                .timeout(READY_PROBE_TIMEOUT)
                .send()
                .await
            {
                Ok(response) if response.status().is_success() => {
                    info!(
                        elapsed_ms = start.elapsed().as_millis() as u64,
                        "LanguageTool server ready"
                    );
                    return Ok(());
                }
                Ok(response) => debug!(status = %response.status(), "LanguageTool not ready yet"),
                Err(e) => debug!(error = %e, "LanguageTool not reachable yet"),
            }

            if start.elapsed() >= timeout {
                return Err(EngineError::Timeout);
            }
            tokio::time::sleep(READY_POLL_INTERVAL).await;
        }
    }
}

#[async_trait]
impl CheckerEngine for LanguageToolEngine {
    async fn start(&mut self) -> Result<(), EngineError> {
        let mut base = match self.settings.url.as_deref() {
            Some(url) => Url::parse(url)
                .map_err(|e| EngineError::Other(format!("Invalid engine URL {}: {}", url, e)))?,
            None => self.spawn_server()?,
        };
        // Url::join drops the last path segment unless it ends with '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        if let Err(e) = self.wait_until_ready(&base).await {
            let _ = self.stop().await;
            return Err(e);
        }
        self.base_url = Some(base);
        Ok(())
    }

    async fn check(&self, text: &str) -> Result<Vec<Finding>, EngineError> {
        let base = self.base_url.as_ref().ok_or(EngineError::NotStarted)?;
        let endpoint = Self::endpoint(base, "v2/check")?;

        let response = self
            .client
            .post(endpoint)
            .form(&[("language", self.settings.language.as_str()), ("text", text)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EngineError::BadResponse(format!("HTTP {}: {}", status, body.trim())));
        }

        let body: CheckResponse = response
            .json()
            .await
            .map_err(|e| EngineError::BadResponse(e.to_string()))?;

        Ok(body.matches.into_iter().map(Finding::from).collect())
    }

    async fn stop(&mut self) -> Result<(), EngineError> {
        self.base_url = None;
        if let Some(mut child) = self.child.take() {
            if let Ok(Some(status)) = child.try_wait() {
                debug!(%status, "LanguageTool server already exited");
                return Ok(());
            }
            info!("Stopping LanguageTool server");
            if let Err(e) = child.kill().await {
                warn!(error = %e, "Failed to stop LanguageTool server");
                return Err(EngineError::Spawn(e));
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "languagetool"
    }
}

/// 替换参数中的 `{port}` 占位符
fn substitute_port(args: &[String], port: u16) -> Vec<String> {
    let port = port.to_string();
    args.iter().map(|arg| arg.replace("{port}", &port)).collect()
}

/// 按 UTF-16 单位截取子串（LanguageTool 的偏移量是 UTF-16 单位）
fn utf16_slice(text: &str, offset: usize, length: usize) -> String {
    let units: Vec<u16> = text.encode_utf16().skip(offset).take(length).collect();
    String::from_utf16_lossy(&units)
}

/// `/v2/check` 响应
#[derive(Debug, Deserialize)]
struct CheckResponse {
    #[serde(default)]
    matches: Vec<Match>,
}

#[derive(Debug, Deserialize)]
struct Match {
    message: String,
    #[serde(default)]
    replacements: Replacements,
    context: MatchContext,
    rule: Rule,
}

/// 替换建议：对象列表，或以分隔符连接的单个字符串
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Replacements {
    List(Vec<Replacement>),
    Joined(String),
}

impl Default for Replacements {
    fn default() -> Self {
        Replacements::List(Vec::new())
    }
}

impl From<Replacements> for Vec<String> {
    fn from(replacements: Replacements) -> Self {
        match replacements {
            Replacements::List(list) => list.into_iter().map(|r| r.value).collect(),
            Replacements::Joined(joined) => Finding::split_replacements(&joined),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Replacement {
    value: String,
}

#[derive(Debug, Deserialize)]
struct MatchContext {
    text: String,
    offset: usize,
    length: usize,
}

#[derive(Debug, Deserialize)]
struct Rule {
    id: String,
    category: Category,
}

#[derive(Debug, Deserialize)]
struct Category {
    name: String,
}

impl From<Match> for Finding {
    fn from(m: Match) -> Self {
        let word = utf16_slice(&m.context.text, m.context.offset, m.context.length);
        Finding {
            rule_id: m.rule.id,
            category: m.rule.category.name,
            message: m.message,
            context: m.context.text,
            word,
            replacements: m.replacements.into(),
        }
    }
}

#[cfg(test)]
#[path = "language_tool_engine_test.rs"]
mod tests;
