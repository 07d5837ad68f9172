// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含拼写检查流程的核心业务逻辑，包括：
/// - 领域模型（models）：页面、检查结果和运行结果
/// - 服务（services）：选择、提取、过滤和报告
///
/// 领域层不依赖具体的检查引擎实现。
pub mod models;
pub mod services;
