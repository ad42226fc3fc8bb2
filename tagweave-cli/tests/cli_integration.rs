//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn fixture() -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("page.dust");
    fs::write(
        &template,
        "<p>{@pre content=index.greeting /}</p><p>{@helper attr=\"value\"/}</p>",
    )
    .unwrap();

    let content = dir.path().join("content.json");
    fs::write(
        &content,
        r#"{"index": {"greeting": "Hello, world", "farewell": "Bye"}}"#,
    )
    .unwrap();

    (dir, template, content)
}

#[test]
fn process_resolves_content_tags_to_stdout() {
    let (_dir, template, content) = fixture();

    Command::cargo_bin("tagweave")
        .unwrap()
        .args(["process", "-q", "-i"])
        .arg(&template)
        .arg("-c")
        .arg(&content)
        .assert()
        .success()
        .stdout("<p>Hello, world</p><p>{@helper attr=\"value\"/}</p>");
}

#[test]
fn process_writes_to_an_output_file() {
    let (dir, template, content) = fixture();
    let out = dir.path().join("page.out");

    Command::cargo_bin("tagweave")
        .unwrap()
        .args(["process", "-q", "-i"])
        .arg(&template)
        .arg("-c")
        .arg(&content)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "<p>Hello, world</p><p>{@helper attr=\"value\"/}</p>"
    );
}

#[test]
fn process_fails_on_unknown_content_keys() {
    let (dir, _template, content) = fixture();
    let template = dir.path().join("broken.dust");
    fs::write(&template, "{@pre content=index.typo /}").unwrap();

    Command::cargo_bin("tagweave")
        .unwrap()
        .args(["process", "-q", "-i"])
        .arg(&template)
        .arg("-c")
        .arg(&content)
        .assert()
        .failure()
        .stderr(predicate::str::contains("index.typo"));
}

#[test]
fn process_fails_when_no_input_matches() {
    let (dir, _template, content) = fixture();

    Command::cargo_bin("tagweave")
        .unwrap()
        .args(["process", "-q", "-i"])
        .arg(dir.path().join("missing-*.dust"))
        .arg("-c")
        .arg(&content)
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn scan_lists_tags_as_text() {
    let (_dir, template, _content) = fixture();

    Command::cargo_bin("tagweave")
        .unwrap()
        .args(["scan", "-q", "-i"])
        .arg(&template)
        .assert()
        .success()
        .stdout(predicate::str::contains("pre\tcontent=\"index.greeting\""))
        .stdout(predicate::str::contains("helper\tattr=\"value\""));
}

#[test]
fn scan_emits_json_reports() {
    let (_dir, template, _content) = fixture();

    let assert = Command::cargo_bin("tagweave")
        .unwrap()
        .args(["scan", "-q", "--format", "json", "-i"])
        .arg(&template)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let reports: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let tags = reports[0]["tags"].as_array().unwrap();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0]["name"], "pre");
    assert_eq!(tags[0]["attributes"]["content"], "index.greeting");
    assert_eq!(tags[1]["name"], "helper");
}

#[test]
fn scan_honours_a_tag_filter() {
    let (_dir, template, _content) = fixture();

    Command::cargo_bin("tagweave")
        .unwrap()
        .args(["scan", "-q", "-t", "pre", "-i"])
        .arg(&template)
        .assert()
        .success()
        .stdout(predicate::str::contains("pre"))
        .stdout(predicate::str::contains("helper").not());
}
