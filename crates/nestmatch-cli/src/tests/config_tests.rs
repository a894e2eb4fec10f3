//! Tests for settings layering and argument routing.

use std::ffi::{OsStr, OsString};
use std::io::Write;

use nestmatch::{MatcherConfig, PatternFlags};
use rstest::rstest;
use tempfile::NamedTempFile;

use crate::config::{
    ArgumentSplit, FlagAction, LogFormat, OrthoSettingsLoader, Settings, SettingsLoader, classify,
    split_arguments,
};
use crate::errors::AppError;

fn os_args(args: &[&str]) -> Vec<OsString> {
    args.iter().map(OsString::from).collect()
}

fn config_file(toml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(toml.as_bytes()).expect("write config");
    file
}

fn load_with_file(file: &NamedTempFile, flags: &[&str]) -> Result<Settings, AppError> {
    let mut args = vec![
        OsString::from("nestmatch"),
        OsString::from("--config-path"),
        file.path().as_os_str().to_owned(),
    ];
    args.extend(flags.iter().map(OsString::from));
    OrthoSettingsLoader.load(&args)
}

#[rstest]
#[case("--start", FlagAction::Include { needs_value: true })]
#[case("--start=<", FlagAction::Include { needs_value: false })]
#[case("--global", FlagAction::Include { needs_value: false })]
#[case("--log-format=json", FlagAction::Include { needs_value: false })]
#[case("--skip", FlagAction::Skip)]
#[case("input.txt", FlagAction::Skip)]
#[case("--unknown", FlagAction::Skip)]
fn flags_are_classified(#[case] argument: &str, #[case] expected: FlagAction) {
    assert_eq!(classify(OsStr::new(argument)), expected);
}

#[test]
fn arguments_are_partitioned_in_order() {
    let split = split_arguments(&os_args(&[
        "nestmatch",
        "--first",
        "--start",
        "-<",
        "file.txt",
        "--global",
        "--end=>",
        "--output",
        "human",
    ]));
    assert_eq!(
        split,
        ArgumentSplit {
            settings: os_args(&["nestmatch", "--start", "-<", "--global", "--end=>"]),
            command: os_args(&["nestmatch", "--first", "file.txt", "--output", "human"]),
        }
    );
}

#[test]
fn arguments_after_double_dash_go_to_the_command() {
    let split = split_arguments(&os_args(&["nestmatch", "--start", "<", "--", "--end"]));
    assert_eq!(split.settings, os_args(&["nestmatch", "--start", "<"]));
    assert_eq!(split.command, os_args(&["nestmatch", "--", "--end"]));
}

#[test]
fn settings_map_to_a_matcher() {
    let settings = Settings {
        start: Some(String::from("<")),
        end: Some(String::from(">")),
        capture_name: Some(String::from("body")),
        global: true,
        ignore_case: true,
        ..Settings::default()
    };
    let expected = MatcherConfig::new("<", ">")
        .with_global(true)
        .with_capture_name("body")
        .with_flags(PatternFlags::default().with_case_sensitive(false));
    assert_eq!(settings.matcher_config().expect("resolves"), expected);
}

#[test]
fn markers_are_required() {
    let settings = Settings {
        start: Some(String::from("<")),
        ..Settings::default()
    };
    assert!(matches!(
        settings.matcher_config(),
        Err(AppError::MissingMarkers)
    ));
}

#[test]
fn logging_defaults_are_quiet() {
    let settings = Settings::default();
    assert_eq!(settings.log_filter(), "warn");
    assert_eq!(settings.log_format(), LogFormat::Compact);
}

#[test]
fn flags_override_the_file() {
    let file = config_file(
        r#"
start = '\('
end = '\)'
capture_name = "args"
dot_all = true
log_format = "json"
"#,
    );
    let settings = load_with_file(&file, &["--end", "]", "--multi-line"]).expect("loads");
    let config = settings.matcher_config().expect("resolves");
    assert_eq!(config.start_marker(), r"\(");
    assert_eq!(config.end_marker(), "]");
    assert_eq!(config.capture_name(), Some("args"));
    assert!(config.flags().dot_all());
    assert!(config.flags().multi_line());
    assert!(config.flags().case_sensitive());
    assert_eq!(settings.log_format(), LogFormat::Json);
}

#[test]
fn file_switches_stay_on_without_flags() {
    let file = config_file("start = \"<\"\nend = \">\"\nglobal = true\n");
    let settings = load_with_file(&file, &[]).expect("loads");
    assert!(settings.global);
    assert!(!settings.ignore_case);
}

#[test]
fn malformed_file_is_reported() {
    let file = config_file("start = ");
    let error = load_with_file(&file, &[]).expect_err("malformed");
    assert!(matches!(error, AppError::LoadConfiguration(_)));
    assert!(error.to_string().contains("failed to load configuration"));
}
