// crates/emojisplit/tests/cli_integration.rs

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;
use std::fs;

const INDEX: &str = "🔴 production\n🔵 staging\n✴️ everywhere\n";

const TEMPLATE: &str = "\
name = demo
🔴url = https://example.com
🔵url = https://staging.example.com
✴️timeout = 30
";

/// Sets up a temp dir with an index file and a template.
fn fixture() -> TempDir {
    let temp = TempDir::new().unwrap();
    temp.child("emoji.index").write_str(INDEX).unwrap();
    temp.child("app.conf.tmpl").write_str(TEMPLATE).unwrap();
    temp
}

fn emojisplit(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("emojisplit").unwrap();
    cmd.current_dir(temp.path())
        .env_remove("EMOJISPLIT_INDEX")
        .env_remove("RUST_LOG")
        .arg("--index")
        .arg(temp.child("emoji.index").path());
    cmd
}

/// --- Test: Single Mode ---
/// The selected marker's sections are written next to the template, minus its extension.
#[test]
fn test_single_mode_writes_selected_sections() {
    let temp = fixture();

    emojisplit(&temp)
        .arg("--emoji")
        .arg("🔴")
        .arg("app.conf.tmpl")
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing: app.conf.tmpl"))
        .stdout(predicate::str::contains("Processed: app.conf.tmpl -> app.conf"));

    let output = fs::read_to_string(temp.child("app.conf").path()).unwrap();
    assert_eq!(output, "name = demo\nurl = https://example.com\ntimeout = 30\n");
}

/// --- Test: Default Selection ---
/// Without --emoji only unmarked text and wildcard sections are kept.
#[test]
fn test_default_selection_is_wildcard() {
    let temp = fixture();

    emojisplit(&temp).arg("app.conf.tmpl").assert().success();

    let output = fs::read_to_string(temp.child("app.conf").path()).unwrap();
    assert_eq!(output, "name = demo\ntimeout = 30\n");
}

/// --- Test: Split Mode ---
/// One output per marker in the index, named with the marker as extension.
#[test]
fn test_split_mode_writes_one_file_per_marker() {
    let temp = fixture();

    emojisplit(&temp)
        .arg("--split")
        .arg("app.conf.tmpl")
        .assert()
        .success()
        .stdout(predicate::str::contains("-> app.conf.🔴"))
        .stdout(predicate::str::contains("-> app.conf.🔵"))
        .stdout(predicate::str::contains("-> app.conf.✴️"));

    let staging = fs::read_to_string(temp.child("app.conf.🔵").path()).unwrap();
    assert_eq!(staging, "name = demo\nurl = https://staging.example.com\ntimeout = 30\n");
    let everywhere = fs::read_to_string(temp.child("app.conf.✴️").path()).unwrap();
    assert_eq!(everywhere, "name = demo\ntimeout = 30\n");
}

/// --- Test: Empty Outputs ---
/// Markers that keep nothing produce no file unless --write-empty is given.
#[test]
fn test_split_mode_skips_empty_outputs() {
    let temp = TempDir::new().unwrap();
    temp.child("emoji.index").write_str("🔴\n🟢\n").unwrap();
    temp.child("hosts.tmpl").write_str("🔴prod-1\nprod-2\n").unwrap();

    emojisplit(&temp).arg("--split").arg("hosts.tmpl").assert().success();
    temp.child("hosts.🔴").assert(predicate::path::exists());
    temp.child("hosts.🟢").assert(predicate::path::missing());

    emojisplit(&temp)
        .arg("--split")
        .arg("--write-empty")
        .arg("hosts.tmpl")
        .assert()
        .success();
    temp.child("hosts.🟢").assert("");
}

/// --- Test: Missing Index ---
/// A missing index aborts before any output is written.
#[test]
fn test_missing_index_is_fatal() {
    let temp = TempDir::new().unwrap();
    temp.child("app.conf.tmpl").write_str(TEMPLATE).unwrap();

    emojisplit(&temp)
        .arg("app.conf.tmpl")
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration unavailable"));

    temp.child("app.conf").assert(predicate::path::missing());
}

/// --- Test: Missing Input ---
#[test]
fn test_missing_input_is_reported() {
    let temp = fixture();

    emojisplit(&temp)
        .arg("missing.tmpl")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input unavailable"));
}

/// --- Test: Overwrite Guard ---
/// Single mode on a file without an extension must not clobber the template.
#[test]
fn test_single_mode_refuses_to_overwrite_input() {
    let temp = fixture();
    temp.child("Dockerfile").write_str(TEMPLATE).unwrap();

    emojisplit(&temp)
        .arg("Dockerfile")
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to overwrite"));

    temp.child("Dockerfile").assert(TEMPLATE);
}

/// --- Test: Environment Override ---
/// EMOJISPLIT_INDEX is used when --index is not given.
#[test]
fn test_index_path_from_environment() {
    let temp = fixture();

    let mut cmd = Command::cargo_bin("emojisplit").unwrap();
    cmd.current_dir(temp.path())
        .env("EMOJISPLIT_INDEX", temp.child("emoji.index").path())
        .arg("--emoji")
        .arg("🔵")
        .arg("app.conf.tmpl")
        .assert()
        .success();

    let output = fs::read_to_string(temp.child("app.conf").path()).unwrap();
    assert_eq!(output, "name = demo\nurl = https://staging.example.com\ntimeout = 30\n");
}

/// --- Test: Custom Wildcard ---
/// Without --emoji the selection is the configured wildcard, so sections
/// tagged with the default wildcard are no longer kept.
#[test]
fn test_custom_wildcard_is_default_selection() {
    let temp = TempDir::new().unwrap();
    temp.child("emoji.index").write_str("🔴\n🔵\n✴️\n⭐\n").unwrap();
    temp.child("app.tmpl")
        .write_str("top\n⭐star\n✴️sparkle\n🔴red\n")
        .unwrap();

    emojisplit(&temp)
        .arg("--wildcard")
        .arg("⭐")
        .arg("app.tmpl")
        .assert()
        .success()
        .stderr(predicate::str::contains("not in the index").not());

    let output = fs::read_to_string(temp.child("app").path()).unwrap();
    assert_eq!(output, "top\nstar\n");
}

/// --- Test: Repeated Failures ---
/// Split mode over an unreadable template reports the failure once.
#[test]
fn test_split_mode_reports_missing_input_once() {
    let temp = fixture();

    let output = emojisplit(&temp)
        .arg("--split")
        .arg("missing.tmpl")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("input unavailable").count(), 1, "stderr: {}", stderr);
}
