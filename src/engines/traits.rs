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

use crate::domain::models::Finding;
use async_trait::async_trait;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 进程启动失败
    #[error("Failed to spawn engine process: {0}")]
    Spawn(#[source] std::io::Error),
    /// 进程在就绪前退出
    #[error("Engine process exited: {0}")]
    Exited(String),
    /// 引擎尚未启动
    #[error("Engine not started")]
    NotStarted,
    /// 超时
    #[error("Timeout")]
    Timeout,
    /// 响应无法解析或状态码异常
    #[error("Bad response: {0}")]
    BadResponse(String),
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// 检查引擎特质
///
/// 每次运行只启动一个实例，并按页面顺序串行复用。
#[async_trait]
pub trait CheckerEngine: Send + Sync {
    /// 启动引擎，阻塞直到可以接受请求
    async fn start(&mut self) -> Result<(), EngineError>;

    /// 整体检查一段文本，按引擎报告顺序返回结果
    async fn check(&self, text: &str) -> Result<Vec<Finding>, EngineError>;

    /// 停止引擎并释放资源
    async fn stop(&mut self) -> Result<(), EngineError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
