// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Overrides;
use clap::Parser;
use std::path::PathBuf;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "spellgate")]
#[command(about = "Spell and grammar check a rendered static site; fails when problems are found")]
#[command(version)]
pub struct Cli {
    /// Directory containing the rendered site (defaults to `build`)
    pub site_dir: Option<PathBuf>,

    /// Configuration file (TOML, YAML or JSON)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only check pages whose URL matches this regex
    #[arg(long, value_name = "REGEX")]
    pub page: Option<String>,

    /// Only check text inside these tags or CSS selectors (repeatable)
    #[arg(long = "tag", value_name = "SELECTOR")]
    pub tags: Vec<String>,

    /// Words allowed to be flagged as misspelled (repeatable)
    #[arg(long = "allow", value_name = "WORD")]
    pub allow: Vec<String>,

    /// Do not apply the allowed words filter
    #[arg(long)]
    pub no_allow_list: bool,

    /// Language code passed to the checker
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,

    /// Use an already running LanguageTool server instead of starting one
    #[arg(long, value_name = "URL")]
    pub server_url: Option<String>,

    /// Fail a check call after this many seconds
    #[arg(long, value_name = "SECS")]
    pub check_timeout: Option<u64>,

    /// Skip pages whose check fails instead of aborting the run
    #[arg(long)]
    pub skip_failed: bool,

    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// 转换为配置覆盖项；未给出的参数不覆盖
    pub fn overrides(&self) -> Overrides {
        Overrides {
            site_dir: self.site_dir.clone(),
            url_pattern: self.page.clone(),
            tags: (!self.tags.is_empty()).then(|| self.tags.clone()),
            allowed_words: (!self.allow.is_empty()).then(|| self.allow.clone()),
            allow_list_enabled: self.no_allow_list.then_some(false),
            language: self.language.clone(),
            engine_url: self.server_url.clone(),
            check_timeout_secs: self.check_timeout,
            skip_failed: self.skip_failed,
        }
    }
}
