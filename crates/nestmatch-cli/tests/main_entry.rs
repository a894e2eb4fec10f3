//! Integration tests for the `nestmatch` binary entry point.
//!
//! Covers standard input handling, exit codes, the settings layers, and
//! diagnostics on stderr.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

#[test]
fn reads_standard_input_when_no_file_is_given() {
    let mut command = cargo_bin_cmd!("nestmatch");
    command
        .args(["--start", "<", "--end", ">", "--output", "human"])
        .write_stdin("x <a<b>> y");
    command.assert().success().stdout("2..8: <a<b>>\n");
}

#[test]
fn redirected_output_defaults_to_json() {
    let mut command = cargo_bin_cmd!("nestmatch");
    command
        .args(["--start", r"\(", "--end", r"\)", "--capture-name", "args"])
        .write_stdin("f(a, g(b))");
    command
        .assert()
        .success()
        .stdout(contains("\"text\": \"(a, g(b))\"").and(contains("\"args\"")));
}

#[test]
fn inverse_mode_prints_text_outside_regions() {
    let mut command = cargo_bin_cmd!("nestmatch");
    command
        .args(["--start", "<", "--end", ">", "--inverse", "[a-z]", "--output", "human"])
        .write_stdin("a<b<c<d><e>f>g>h");
    command.assert().success().stdout("0..1: a\n15..16: h\n");
}

#[test]
fn no_match_exits_with_status_one() {
    let mut command = cargo_bin_cmd!("nestmatch");
    command
        .args(["--start", "<", "--end", ">", "--count", "--output", "human"])
        .write_stdin("plain text");
    command.assert().code(1).stdout("0\n");
}

#[test]
fn invalid_pattern_fails_with_message() {
    let mut command = cargo_bin_cmd!("nestmatch");
    command.args(["--start", "(", "--end", ")"]).write_stdin("()");
    command
        .assert()
        .failure()
        .stderr(contains("invalid pattern `(`"));
}

#[test]
fn environment_supplies_markers() {
    let mut command = cargo_bin_cmd!("nestmatch");
    command
        .env("NESTMATCH_START", "<")
        .env("NESTMATCH_END", ">")
        .args(["--output", "human"])
        .write_stdin("x<y>");
    command.assert().success().stdout("1..4: <y>\n");
}

#[test]
fn environment_turns_off_a_file_switch() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("nestmatch.toml");
    fs::write(&path, "start = \"<\"\nend = \">\"\nglobal = true\n").expect("write config");

    let mut global = cargo_bin_cmd!("nestmatch");
    global
        .arg("--config-path")
        .arg(&path)
        .args(["--output", "human"])
        .write_stdin("<a<b>>");
    global.assert().success().stdout("2..5: <b>\n0..6: <a<b>>\n");

    let mut top_level = cargo_bin_cmd!("nestmatch");
    top_level
        .env("NESTMATCH_GLOBAL", "false")
        .arg("--config-path")
        .arg(&path)
        .args(["--output", "human"])
        .write_stdin("<a<b>>");
    top_level.assert().success().stdout("0..6: <a<b>>\n");
}

#[test]
fn flags_override_the_environment() {
    let mut command = cargo_bin_cmd!("nestmatch");
    command
        .env("NESTMATCH_START", r"\[")
        .env("NESTMATCH_END", r"\]")
        .args(["--start", "<", "--end", ">", "--output", "human"])
        .write_stdin("[a] <b>");
    command.assert().success().stdout("4..7: <b>\n");
}

#[test]
fn debug_logging_goes_to_stderr() {
    let mut command = cargo_bin_cmd!("nestmatch");
    command
        .args([
            "--start",
            "<",
            "--end",
            ">",
            "--output",
            "human",
            "--log-filter",
            "debug",
            "--log-format",
            "json",
        ])
        .write_stdin("<a>");
    command
        .assert()
        .success()
        .stdout("0..3: <a>\n")
        .stderr(contains("matching finished").and(contains("\"level\":\"DEBUG\"")));
}
