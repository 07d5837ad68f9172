// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use spellgate::application::use_cases::spellcheck_use_case::SpellcheckUseCase;
use spellgate::config::settings::{Overrides, Settings};
use spellgate::domain::models::{CheckConfiguration, Finding, RunOutcome};
use spellgate::domain::services::report_service::ReportService;
use spellgate::engines::scripted_engine::ScriptedEngine;
use spellgate::infrastructure::site_loader;
use std::fs;

fn typo(word: &str) -> Finding {
    Finding {
        rule_id: "MORFOLOGIK_RULE_EN_US".to_string(),
        category: "Possible Typo".to_string(),
        message: "Possible spelling mistake found.".to_string(),
        context: format!("This is {}.", word),
        word: word.to_string(),
        replacements: vec!["typo".to_string(), "type".to_string()],
    }
}

fn build_site() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("blog/first")).unwrap();
    fs::create_dir_all(dir.path().join("stylesheets")).unwrap();
    fs::write(
        dir.path().join("index.html"),
        "<html><body><h1>Welcome</h1><p>All good here.</p></body></html>",
    )
    .unwrap();
    fs::write(
        dir.path().join("blog/first/index.html"),
        "<html><body><h1>First post</h1><p>This is tpyo.</p></body></html>",
    )
    .unwrap();
    fs::write(dir.path().join("stylesheets/site.css"), "/* tpyo */").unwrap();
    dir
}

#[tokio::test]
async fn test_site_with_typo_on_blog_page_fails() {
    let site = build_site();
    let pages = site_loader::load_pages(site.path()).unwrap();
    let engine = ScriptedEngine::new().with_finding("tpyo", typo("tpyo"));
    let calls = engine.calls();

    let config = CheckConfiguration::new(".*", &[] as &[&str], &[], true).unwrap();

    let mut use_case = SpellcheckUseCase::new(engine, config);
    let mut reporter = ReportService::new(Vec::new());
    let result = use_case.execute(&pages, &mut reporter).await.unwrap();
    let out = String::from_utf8(reporter.into_inner()).unwrap();

    assert_eq!(result.outcome(), RunOutcome::Failed);
    assert_eq!(calls.lock().len(), 2);
    assert!(out.contains("Running spell checker for /blog/first/\n"));
    assert!(out.contains("Running spell checker for /\n"));
    assert!(!out.contains("site.css"));
    assert!(out.contains("Context: This is tpyo.\nReplacements: typo type\n"));
    assert!(out.ends_with("Build failed. There are spelling errors.\n"));
}

#[tokio::test]
async fn test_settings_drive_scope_and_allow_list() {
    let site = build_site();
    let settings = Settings::load(
        None,
        Overrides {
            site_dir: Some(site.path().to_path_buf()),
            url_pattern: Some("^/blog/".to_string()),
            tags: Some(vec!["p".to_string()]),
            allowed_words: Some(vec!["TPYO".to_string()]),
            ..Overrides::default()
        },
    )
    .unwrap();

    let pages = site_loader::load_pages(&settings.run.site_dir).unwrap();
    let config = CheckConfiguration::from_settings(&settings.check).unwrap();
    let engine = ScriptedEngine::new().with_finding("tpyo", typo("tpyo"));
    let calls = engine.calls();

    let mut use_case = SpellcheckUseCase::new(engine, config);
    let mut reporter = ReportService::new(Vec::new());
    let result = use_case.execute(&pages, &mut reporter).await.unwrap();

    assert_eq!(result.outcome(), RunOutcome::Passed);
    assert_eq!(*calls.lock(), vec!["This is tpyo.".to_string()]);
    assert_eq!(
        String::from_utf8(reporter.into_inner()).unwrap(),
        "Running spell checker for /blog/first/\n"
    );
}
