// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Parser;
use spellgate::application::use_cases::spellcheck_use_case::SpellcheckUseCase;
use spellgate::cli::Cli;
use spellgate::config::settings::Settings;
use spellgate::domain::models::{CheckConfiguration, RunOutcome};
use spellgate::domain::services::report_service::ReportService;
use spellgate::engines::language_tool_engine::LanguageToolEngine;
use spellgate::infrastructure::site_loader;
use spellgate::utils::errors::GateError;
use spellgate::utils::telemetry;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info};

/// 主函数
///
/// 加载配置和站点，启动检查引擎，逐页检查并以结局作为退出码
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // 1. Initialize logging
    telemetry::init_telemetry(cli.verbose);

    match run(cli).await {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => {
            error!(error = %err, "spellgate failed");
            eprintln!("spellgate: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<RunOutcome, GateError> {
    // 2. Load configuration
    let settings = Settings::load(cli.config.as_deref(), cli.overrides())?;
    let config = CheckConfiguration::from_settings(&settings.check)?;
    info!(
        url_pattern = %settings.check.url_pattern,
        tags = ?settings.check.tags,
        "Configuration loaded"
    );

    // 3. Read rendered pages
    let pages = site_loader::load_pages(&settings.run.site_dir)?;

    // 4. Check
    let engine = LanguageToolEngine::new(settings.engine.clone()).map_err(GateError::EngineStartup)?;
    let mut use_case = SpellcheckUseCase::new(engine, config)
        .with_check_timeout(settings.engine.check_timeout_secs.map(Duration::from_secs))
        .with_error_policy(settings.run.on_check_error);

    let mut reporter = ReportService::new(std::io::stdout());
    let result = use_case.execute(&pages, &mut reporter).await?;

    Ok(result.outcome())
}
