// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 选择服务（selector_service）：按URL模式和扩展名挑选页面
/// - 提取服务（extraction_service）：从渲染后的HTML中提取文本
/// - 过滤服务（filter_service）：丢弃噪声规则和允许词
/// - 报告服务（report_service）：输出结果并决定运行结局
pub mod extraction_service;
pub mod filter_service;
pub mod report_service;
pub mod selector_service;
