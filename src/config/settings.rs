// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 应用程序配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 检查范围配置
    pub check: CheckSettings,
    /// 检查引擎配置
    pub engine: EngineSettings,
    /// 运行配置
    pub run: RunSettings,
}

/// 检查范围配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CheckSettings {
    /// 只检查URL匹配该正则的页面
    pub url_pattern: String,
    /// 只检查这些标签（CSS选择器）中的文本，为空时检查整页
    pub tags: Vec<String>,
    /// 允许拼写"错误"的单词
    pub allowed_words: Vec<String>,
    /// 是否启用允许词过滤
    pub allow_list_enabled: bool,
}

/// 检查引擎配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// 检查语言
    pub language: String,
    /// 已运行的服务地址；设置后不再启动本地进程
    pub url: Option<String>,
    /// 启动服务的程序
    pub program: String,
    /// 启动参数，`{port}` 会被替换为实际端口
    pub args: Vec<String>,
    /// 首选端口
    pub port: u16,
    /// 启动超时时间（秒）
    pub startup_timeout_secs: u64,
    /// 单次检查超时时间（秒），未设置时不限时
    pub check_timeout_secs: Option<u64>,
}

/// 运行配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct RunSettings {
    /// 已渲染站点目录
    pub site_dir: PathBuf,
    /// 单页检查失败时的处理策略
    pub on_check_error: CheckErrorPolicy,
}

/// 单页检查失败时的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckErrorPolicy {
    /// 立即终止运行
    Abort,
    /// 记录并跳过该页面
    Skip,
}

/// 命令行覆盖项
///
/// 未设置的字段不会覆盖其他来源的值
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub site_dir: Option<PathBuf>,
    pub url_pattern: Option<String>,
    pub tags: Option<Vec<String>>,
    pub allowed_words: Option<Vec<String>>,
    pub allow_list_enabled: Option<bool>,
    pub language: Option<String>,
    pub engine_url: Option<String>,
    pub check_timeout_secs: Option<u64>,
    pub skip_failed: bool,
}

impl Settings {
    /// 从指定配置文件和命令行覆盖项加载配置
    ///
    /// 依次叠加：默认值、配置文件、`SPELLGATE__` 环境变量、命令行覆盖项。
    /// 未指定文件时尝试读取工作目录下可选的 `spellgate.*`
    pub fn load(config_file: Option<&Path>, overrides: Overrides) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("spellgate").required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix("SPELLGATE")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("check.tags")
                .with_list_parse_key("check.allowed_words")
                .with_list_parse_key("engine.args")
                .try_parsing(true),
        );

        let settings: Settings = Self::apply_overrides(builder, overrides)?
            .build()?
            .try_deserialize()?;
        Ok(settings.normalized())
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            // Check scope
            .set_default("check.url_pattern", ".*")?
            .set_default("check.tags", Vec::<String>::new())?
            .set_default("check.allowed_words", Vec::<String>::new())?
            .set_default("check.allow_list_enabled", true)?
            // LanguageTool server
            .set_default("engine.language", "en-US")?
            .set_default("engine.program", "java")?
            .set_default(
                "engine.args",
                vec![
                    "-cp",
                    "languagetool-server.jar",
                    "org.languagetool.server.HTTPServer",
                    "--port",
                    "{port}",
                ],
            )?
            .set_default("engine.port", 8081)?
            .set_default("engine.startup_timeout_secs", 60)?
            // Run
            .set_default("run.site_dir", "build")?
            .set_default("run.on_check_error", "abort")
    }

    fn apply_overrides(
        builder: ConfigBuilder<DefaultState>,
        overrides: Overrides,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let site_dir = overrides
            .site_dir
            .map(|dir| dir.to_string_lossy().into_owned());
        let on_check_error = overrides.skip_failed.then_some("skip");

        builder
            .set_override_option("run.site_dir", site_dir)?
            .set_override_option("run.on_check_error", on_check_error)?
            .set_override_option("check.url_pattern", overrides.url_pattern)?
            .set_override_option("check.tags", overrides.tags)?
            .set_override_option("check.allowed_words", overrides.allowed_words)?
            .set_override_option("check.allow_list_enabled", overrides.allow_list_enabled)?
            .set_override_option("engine.language", overrides.language)?
            .set_override_option("engine.url", overrides.engine_url)?
            .set_override_option("engine.check_timeout_secs", overrides.check_timeout_secs)
    }

    fn normalized(mut self) -> Self {
        self.check.allowed_words = self
            .check
            .allowed_words
            .iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        self.check.tags.retain(|t| !t.trim().is_empty());
        self
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
