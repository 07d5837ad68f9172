// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::EngineError;
use thiserror::Error;

/// 运行级错误类型
///
/// 拼写问题本身不是错误，由 `RunOutcome` 表示。
#[derive(Error, Debug)]
pub enum GateError {
    #[error("配置错误: {0}")]
    Configuration(String),

    #[error("无效的URL匹配模式: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("无效的标签选择器: {0}")]
    InvalidTag(String),

    #[error("站点目录错误: {0}")]
    Site(String),

    #[error("检查引擎启动失败: {0}")]
    EngineStartup(#[source] EngineError),

    #[error("检查 {url} 失败: {source}")]
    EngineCall {
        url: String,
        #[source]
        source: EngineError,
    },

    #[error("写出报告失败: {0}")]
    Output(#[from] std::io::Error),
}

impl GateError {
    /// 进程退出码
    ///
    /// 配置与输入错误为 3，引擎和输出错误为 2
    pub fn exit_code(&self) -> u8 {
        match self {
            GateError::Configuration(_)
            | GateError::InvalidPattern(_)
            | GateError::InvalidTag(_)
            | GateError::Site(_) => 3,
            GateError::EngineStartup(_) | GateError::EngineCall { .. } | GateError::Output(_) => 2,
        }
    }
}

impl From<config::ConfigError> for GateError {
    fn from(err: config::ConfigError) -> Self {
        GateError::Configuration(err.to_string())
    }
}
