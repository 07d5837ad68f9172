// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了检查流程的核心实体，包括：
/// - 检查配置（check_configuration）：编译后的URL模式、标签和允许词
/// - 页面（page）：已渲染的单个输出单元
/// - 检查结果（finding）：检查引擎报告的单个问题
/// - 运行结果（run_result）：一次运行中累积的所有问题
pub mod check_configuration;
pub mod finding;
pub mod page;
pub mod run_result;

pub use check_configuration::CheckConfiguration;
pub use finding::Finding;
pub use page::Page;
pub use run_result::{RunOutcome, RunResult, SkippedPage};
