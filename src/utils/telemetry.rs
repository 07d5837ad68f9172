// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 根据 `-v` 次数得到默认过滤规则
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn,spellgate=info",
        1 => "warn,spellgate=debug",
        _ => "info,spellgate=trace",
    }
}

/// 初始化日志
///
/// 日志写到 stderr，stdout 只留给检查报告。
/// 重复调用时忽略后续初始化。
pub fn init_telemetry(verbosity: u8) {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(verbosity).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
