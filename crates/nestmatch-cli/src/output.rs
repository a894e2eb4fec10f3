//! Rendering of match lists for humans and machines.

use std::io::{self, Write};

use clap::ValueEnum;
use nestmatch::Match;
use serde_json::json;

use crate::errors::AppError;

/// Output format selection.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Selects `human` for terminal output and `json` for redirected output.
    #[default]
    Auto,
    /// Always render human-readable output.
    Human,
    /// Always emit JSON.
    Json,
}

/// Output format after resolving `auto` based on TTY detection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolvedOutputFormat {
    /// One line per match, followed by its captures.
    Human,
    /// A JSON document.
    Json,
}

impl OutputFormat {
    /// Resolves the output format based on whether stdout is a terminal.
    #[must_use]
    pub const fn resolve(self, stdout_is_terminal: bool) -> ResolvedOutputFormat {
        match self {
            Self::Auto => {
                if stdout_is_terminal {
                    ResolvedOutputFormat::Human
                } else {
                    ResolvedOutputFormat::Json
                }
            }
            Self::Human => ResolvedOutputFormat::Human,
            Self::Json => ResolvedOutputFormat::Json,
        }
    }
}

/// Writes `matches` in the requested format.
pub(crate) fn write_matches<W: Write>(
    out: &mut W,
    format: ResolvedOutputFormat,
    matches: &[Match<'_>],
) -> Result<(), AppError> {
    match format {
        ResolvedOutputFormat::Human => render_human(out, matches).map_err(AppError::WriteOutput),
        ResolvedOutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, matches).map_err(AppError::SerialiseOutput)?;
            writeln!(out).map_err(AppError::WriteOutput)
        }
    }
}

/// Writes the number of matches in the requested format.
pub(crate) fn write_count<W: Write>(
    out: &mut W,
    format: ResolvedOutputFormat,
    count: usize,
) -> Result<(), AppError> {
    match format {
        ResolvedOutputFormat::Human => writeln!(out, "{count}").map_err(AppError::WriteOutput),
        ResolvedOutputFormat::Json => {
            serde_json::to_writer(&mut *out, &json!({ "count": count }))
                .map_err(AppError::SerialiseOutput)?;
            writeln!(out).map_err(AppError::WriteOutput)
        }
    }
}

/// Renders each match as `start..end: text` with indented captures.
pub(crate) fn render_human<W: Write>(out: &mut W, matches: &[Match<'_>]) -> io::Result<()> {
    for found in matches {
        writeln!(out, "{}..{}: {}", found.start(), found.end(), found.text())?;
        for (name, capture) in found.captures() {
            let range = capture.range();
            writeln!(
                out,
                "  {name} {}..{}: {}",
                range.start,
                range.end,
                capture.text()
            )?;
        }
    }
    Ok(())
}
