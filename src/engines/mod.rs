// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod language_tool_engine;
pub mod scripted_engine;
pub mod traits;
