// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::json;
use std::fs;
use std::path::Path;
use std::process::Output;
use tokio::process::Command;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn language_tool() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/languages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    server
}

fn site(pages: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (relative, content) in pages {
        let file = dir.path().join(relative);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(file, content).unwrap();
    }
    dir
}

async fn spellgate(site: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_spellgate"))
        .arg(site)
        .args(args)
        .current_dir(site)
        .env_remove("RUST_LOG")
        .output()
        .await
        .expect("failed to run spellgate")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[tokio::test]
async fn test_clean_site_exits_zero() {
    let server = language_tool().await;
    Mock::given(method("POST"))
        .and(path("/v2/check"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "matches": [] })))
        .expect(1)
        .mount(&server)
        .await;
    let site = site(&[("index.html", "<p>Hello world</p>")]);

    let output = spellgate(site.path(), &["--server-url", &server.uri()]).await;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Running spell checker for /\n");
}

#[tokio::test]
async fn test_typo_exits_one_with_report() {
    let server = language_tool().await;
    Mock::given(method("POST"))
        .and(path("/v2/check"))
        .and(body_string_contains("text=Helo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "matches": [{
                "message": "Possible spelling mistake found.",
                "replacements": [{ "value": "Hello" }, { "value": "Help" }],
                "offset": 0,
                "length": 4,
                "context": { "text": "Helo world", "offset": 0, "length": 4 },
                "rule": {
                    "id": "MORFOLOGIK_RULE_EN_US",
                    "category": { "id": "TYPOS", "name": "Possible Typo" }
                }
            }]
        })))
        .mount(&server)
        .await;
    let site = site(&[("about/index.html", "<p>Helo world</p>")]);

    let output = spellgate(site.path(), &["--server-url", &server.uri()]).await;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "Running spell checker for /about/\n\
         Category: Possible Typo\n\
         Message: Possible spelling mistake found.\n\
         Context: Helo world\n\
         Replacements: Hello Help\n\
         Build failed. There are spelling errors.\n"
    );
}

#[tokio::test]
async fn test_allowed_word_passes() {
    let server = language_tool().await;
    Mock::given(method("POST"))
        .and(path("/v2/check"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "matches": [{
                "message": "Possible spelling mistake found.",
                "replacements": [],
                "context": { "text": "Middleman rocks", "offset": 0, "length": 9 },
                "rule": {
                    "id": "MORFOLOGIK_RULE_EN_US",
                    "category": { "name": "Possible Typo" }
                }
            }]
        })))
        .mount(&server)
        .await;
    let site = site(&[("index.html", "<p>Middleman rocks</p>")]);

    let output = spellgate(
        site.path(),
        &["--server-url", &server.uri(), "--allow", "middleman"],
    )
    .await;

    assert_eq!(output.status.code(), Some(0));
}

#[tokio::test]
async fn test_stylesheets_and_scripts_never_checked() {
    let server = language_tool().await;
    Mock::given(method("POST"))
        .and(path("/v2/check"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "matches": [] })))
        .expect(1)
        .mount(&server)
        .await;
    let site = site(&[
        ("index.html", "<p>Hello</p>"),
        ("stylesheets/site.css", "body {}"),
        ("javascripts/app.js", "var x;"),
    ]);

    let output = spellgate(site.path(), &["--server-url", &server.uri(), "--page", "."]).await;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Running spell checker for /\n");
}

#[tokio::test]
async fn test_invalid_pattern_exits_three_without_output() {
    let site = site(&[("index.html", "<p>Hello</p>")]);

    let output = spellgate(site.path(), &["--page", "(", "--server-url", "http://127.0.0.1:1"]).await;

    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stdout(&output), "");
}

#[tokio::test]
async fn test_engine_not_ready_exits_two() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/languages"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let site = site(&[("index.html", "<p>Hello</p>")]);

    let output = Command::new(env!("CARGO_BIN_EXE_spellgate"))
        .arg(site.path())
        .args(["--server-url", &server.uri()])
        .current_dir(site.path())
        .env("SPELLGATE__ENGINE__STARTUP_TIMEOUT_SECS", "0")
        .output()
        .await
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");
}

#[tokio::test]
async fn test_check_failure_exits_two() {
    let server = language_tool().await;
    Mock::given(method("POST"))
        .and(path("/v2/check"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let site = site(&[("index.html", "<p>Hello</p>")]);

    let output = spellgate(site.path(), &["--server-url", &server.uri()]).await;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "Running spell checker for /\n");
}
