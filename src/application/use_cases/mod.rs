// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// 一次完整的站点拼写检查运行
pub mod spellcheck_use_case;
