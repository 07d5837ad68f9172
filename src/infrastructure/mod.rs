// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 包含的子模块：
/// - 站点读取（site_loader）：把已渲染的站点目录转换为页面列表
pub mod site_loader;
