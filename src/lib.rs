// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 串联选择、提取、检查、过滤和报告的检查流程
pub mod application;

/// 命令行模块
///
/// 定义命令行参数
pub mod cli;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含页面、检查结果等核心实体和服务
pub mod domain;

/// 引擎模块
///
/// 外部拼写/语法检查引擎的抽象与实现
pub mod engines;

/// 基础设施模块
///
/// 读取已渲染站点目录
pub mod infrastructure;

/// 工具模块
///
/// 提供错误类型、遥测和端口嗅探等辅助功能
pub mod utils;
