//! Matcher and logging settings layered by `ortho_config`.
//!
//! Later layers win: defaults, then the TOML file named by `--config-path`
//! or `NESTMATCH_CONFIG_PATH`, then `NESTMATCH_*` environment variables,
//! then command-line flags. Only the flags in [`CONFIG_CLI_FLAGS`] reach the
//! loader; every other argument is parsed by [`crate::cli::Cli`].

use std::ffi::{OsStr, OsString};

use clap::ValueEnum;
use nestmatch::{MatcherConfig, PatternFlags};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;

/// Flags recognised by the settings loader, with whether each takes a value.
///
/// MAINTENANCE: keep in sync with the fields of [`Settings`].
pub(crate) const CONFIG_CLI_FLAGS: &[(&str, bool)] = &[
    ("--config-path", true),
    ("--start", true),
    ("--end", true),
    ("--prepended", true),
    ("--appended", true),
    ("--capture-name", true),
    ("--inverse", true),
    ("--global", false),
    ("--ignore-case", false),
    ("--multi-line", false),
    ("--unicode", false),
    ("--dot-all", false),
    ("--log-filter", true),
    ("--log-format", true),
];

const DEFAULT_LOG_FILTER: &str = "warn";

/// Log output format.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable single line output.
    #[default]
    Compact,
    /// Structured JSON suitable for ingestion by logging stacks.
    Json,
}

/// Settings describing the matcher and the diagnostics of one run.
///
/// Switches default to off. A file or environment layer may set them
/// either way; a command-line switch can only turn one on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "NESTMATCH")]
pub struct Settings {
    /// Pattern for the opening marker.
    pub start: Option<String>,
    /// Pattern for the closing marker.
    pub end: Option<String>,
    /// Pattern that must end exactly where an opening marker begins.
    pub prepended: Option<String>,
    /// Pattern that must begin exactly where a closing marker ends.
    pub appended: Option<String>,
    /// Names the capture group bound to the text between the markers.
    pub capture_name: Option<String>,
    /// Matches this pattern only outside every delimited region.
    pub inverse: Option<String>,
    /// Reports regions at every nesting depth, not only the outermost.
    #[serde(default)]
    pub global: bool,
    /// Matches letters regardless of case.
    #[serde(default)]
    pub ignore_case: bool,
    /// Lets `^` and `$` match at line boundaries.
    #[serde(default)]
    pub multi_line: bool,
    /// Enables Unicode-aware classes and case folding.
    #[serde(default)]
    pub unicode: bool,
    /// Lets `.` match line breaks.
    #[serde(default)]
    pub dot_all: bool,
    /// Tracing filter directive, for example `nestmatch=debug`.
    pub log_filter: Option<String>,
    /// Format of diagnostic log lines written to stderr.
    pub log_format: Option<LogFormat>,
}

impl Settings {
    /// Builds the matcher configuration; both markers must be set.
    pub(crate) fn matcher_config(&self) -> Result<MatcherConfig, AppError> {
        let (Some(start), Some(end)) = (&self.start, &self.end) else {
            return Err(AppError::MissingMarkers);
        };
        let flags = PatternFlags::default()
            .with_case_sensitive(!self.ignore_case)
            .with_multi_line(self.multi_line)
            .with_unicode(self.unicode)
            .with_dot_all(self.dot_all);
        let mut config = MatcherConfig::new(start.as_str(), end.as_str())
            .with_flags(flags)
            .with_global(self.global);
        if let Some(prepended) = &self.prepended {
            config = config.with_prepended(prepended.as_str());
        }
        if let Some(appended) = &self.appended {
            config = config.with_appended(appended.as_str());
        }
        if let Some(name) = &self.capture_name {
            config = config.with_capture_name(name.as_str());
        }
        if let Some(inverse) = &self.inverse {
            config = config.with_inverse_match(inverse.as_str());
        }
        debug!(?config, "resolved matcher configuration");
        Ok(config)
    }

    pub(crate) fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    pub(crate) fn log_format(&self) -> LogFormat {
        self.log_format.unwrap_or_default()
    }
}

pub(crate) trait SettingsLoader {
    /// Loads settings from the arguments selected by [`split_arguments`].
    fn load(&self, args: &[OsString]) -> Result<Settings, AppError>;
}

pub(crate) struct OrthoSettingsLoader;

impl SettingsLoader for OrthoSettingsLoader {
    fn load(&self, args: &[OsString]) -> Result<Settings, AppError> {
        Settings::load_from_iter(args.iter().cloned()).map_err(AppError::LoadConfiguration)
    }
}

/// Arguments routed to the settings loader and to the command parser.
///
/// Both lists start with the program name.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct ArgumentSplit {
    pub(crate) settings: Vec<OsString>,
    pub(crate) command: Vec<OsString>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FlagAction {
    Include { needs_value: bool },
    Skip,
}

pub(crate) fn classify(argument: &OsStr) -> FlagAction {
    let text = argument.to_string_lossy();
    let (flag, inline_value) = text
        .split_once('=')
        .map_or((&*text, false), |(flag, _)| (flag, true));
    CONFIG_CLI_FLAGS
        .iter()
        .find(|(name, _)| *name == flag)
        .map_or(FlagAction::Skip, |&(_, takes_value)| FlagAction::Include {
            needs_value: takes_value && !inline_value,
        })
}

/// Partitions `args` between the settings loader and the command parser.
///
/// A settings flag takes the following argument as its value unless the
/// value is inline (`--start=<`). Everything after `--` goes to the command
/// parser.
pub(crate) fn split_arguments(args: &[OsString]) -> ArgumentSplit {
    let mut split = ArgumentSplit::default();
    let mut arguments = args.iter();
    if let Some(program) = arguments.next() {
        split.settings.push(program.clone());
        split.command.push(program.clone());
    }
    while let Some(argument) = arguments.next() {
        if argument == "--" {
            split.command.push(argument.clone());
            split.command.extend(arguments.cloned());
            break;
        }
        match classify(argument) {
            FlagAction::Include { needs_value } => {
                split.settings.push(argument.clone());
                if needs_value {
                    split.settings.extend(arguments.next().cloned());
                }
            }
            FlagAction::Skip => split.command.push(argument.clone()),
        }
    }
    split
}
