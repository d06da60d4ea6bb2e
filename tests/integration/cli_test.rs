//! Integration tests for the logtint binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{fixtures_dir, temp_fixture};

/// A command with its config isolated in `dir`.
fn logtint(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("logtint").expect("binary built");
    cmd.env("LOGTINT_CONFIG", dir.path().join("config.toml"));
    cmd.env_remove("LOGTINT_LOG");
    cmd
}

#[test]
fn renders_stdin_as_html_when_piped() {
    let dir = TempDir::new().unwrap();
    logtint(&dir)
        .arg("render")
        .write_stdin("\x1b[31mred\x1b[0m  x\n")
        .assert()
        .success()
        .stdout("<span class=\"fg-red\">red</span> &nbsp;x<br>");
}

#[test]
fn renders_file_in_requested_format() {
    let dir = TempDir::new().unwrap();
    logtint(&dir)
        .args(["render", "--format", "plain"])
        .arg(fixtures_dir().join("truncated.log"))
        .assert()
        .success()
        .stdout("compiling foo.c\nKilled\x1b[1");
}

#[test]
fn config_format_is_used_as_default() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "[render]\nformat = \"json\"\n").unwrap();
    logtint(&dir)
        .arg("render")
        .write_stdin("x")
        .assert()
        .success()
        .stdout("[{\"text\":\"x\",\"attributes\":[]}]\n");
}

#[test]
fn bg_palette_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    logtint(&dir)
        .args(["render", "-f", "json", "--bg-palette", "standard"])
        .write_stdin("\x1b[42mx")
        .assert()
        .success()
        .stdout(predicate::str::contains("bg-green"));
}

#[test]
fn out_dir_renders_each_file() {
    let dir = TempDir::new().unwrap();
    let (_fixture_dir, build) = temp_fixture("build.log");
    let (_fixture_dir2, truncated) = temp_fixture("truncated.log");
    let out = dir.path().join("out");

    logtint(&dir)
        .args(["render", "--format", "html", "--out-dir"])
        .arg(&out)
        .arg(&build)
        .arg(&truncated)
        .assert()
        .success();

    let build_html = fs::read_to_string(out.join("build.html")).unwrap();
    assert!(build_html.contains("<span class=\"fg-green\">yes</span>"));
    let truncated_html = fs::read_to_string(out.join("truncated.html")).unwrap();
    assert!(truncated_html.starts_with("compiling <span class=\"bright\">foo.c</span><br>"));
}

#[test]
fn out_dir_refuses_logs_sharing_a_name() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("a")).unwrap();
    fs::create_dir_all(dir.path().join("b")).unwrap();
    fs::write(dir.path().join("a/build.log"), "AAA").unwrap();
    fs::write(dir.path().join("b/build.log"), "BBB").unwrap();
    let out = dir.path().join("out");

    logtint(&dir)
        .current_dir(dir.path())
        .args(["render", "--format", "plain", "--out-dir"])
        .arg(&out)
        .args(["a/build.log", "b/build.log"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("would both be written to"));

    assert!(!out.join("build.txt").exists());
}

#[test]
fn render_help_lists_options() {
    let dir = TempDir::new().unwrap();
    logtint(&dir)
        .args(["render", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--out-dir <OUT_DIR>"))
        .stdout(predicate::str::contains("Possible values:"));
}

#[test]
fn snapshot_cli_help_render() {
    let dir = TempDir::new().unwrap();
    let output = logtint(&dir)
        .env("NO_COLOR", "1")
        .args(["render", "--help"])
        .output()
        .unwrap();
    let snapshot = format!(
        "=== logtint render --help ===\nExit code: {}\n\n--- stdout ---\n{}\n--- stderr ---\n{}",
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).trim_end(),
        String::from_utf8_lossy(&output.stderr)
    );
    insta::assert_snapshot!("cli_help_render", snapshot);
}

#[test]
fn missing_file_fails_with_message() {
    let dir = TempDir::new().unwrap();
    logtint(&dir)
        .args(["render", "/nonexistent/build.log"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Log file not found"));
}

#[test]
fn config_init_then_show() {
    let dir = TempDir::new().unwrap();
    logtint(&dir)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(dir.path().join("config.toml").exists());

    logtint(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    logtint(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("format = \"auto\""))
        .stdout(predicate::str::contains("background_palette = \"legacy\""));
}

#[test]
fn config_path_honours_override() {
    let dir = TempDir::new().unwrap();
    logtint(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    logtint(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("logtint"));
}
