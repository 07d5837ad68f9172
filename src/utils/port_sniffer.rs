// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::net::TcpListener;
use thiserror::Error;
use tracing::{debug, info};

/// 最多向后尝试的端口数
const MAX_ATTEMPTS: u16 = 100;

/// 端口嗅探错误类型
#[derive(Error, Debug)]
pub enum PortSnifferError {
    #[error("端口号 {0} 超出有效范围 (1-65535)")]
    PortOutOfRange(u16),
    #[error("未找到可用端口: {0}")]
    NoAvailablePort(String),
}

/// 端口嗅探器
///
/// 为本地启动的检查引擎挑选一个空闲端口
pub struct PortSniffer;

impl PortSniffer {
    /// 检查指定端口是否已被占用
    pub fn is_port_in_use(port: u16) -> bool {
        TcpListener::bind(("127.0.0.1", port)).is_err()
    }

    /// 从 `start_port` 开始查找第一个空闲端口
    ///
    /// # 返回值
    ///
    /// * `Ok(u16)` - 空闲端口
    /// * `Err(PortSnifferError)` - 范围内没有空闲端口
    pub fn find_available_port(start_port: u16) -> Result<u16, PortSnifferError> {
        if start_port == 0 {
            return Err(PortSnifferError::PortOutOfRange(start_port));
        }

        let max_port = start_port.saturating_add(MAX_ATTEMPTS);
        for port in start_port..=max_port {
            if !Self::is_port_in_use(port) {
                info!(port, "找到可用端口");
                return Ok(port);
            }
            debug!(port, "端口已被占用，尝试下一个端口");
        }

        Err(PortSnifferError::NoAvailablePort(format!(
            "在范围 {}-{} 内未找到可用端口",
            start_port, max_port
        )))
    }
}
