//! Command-line runtime for the `nestmatch` tool.
//!
//! Matcher and logging settings are layered by `ortho_config` from a TOML
//! file, `NESTMATCH_*` environment variables and their flags; the remaining
//! arguments choose the input, the selection and the output format. [`run`]
//! takes its input and output streams as parameters so it can be exercised
//! from the binary entrypoint and from tests alike.
//!
//! Exit codes follow the `grep` convention: `0` when something matched, `1`
//! when nothing did, and a failure code with a message on stderr for usage,
//! configuration, or input errors.

use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use nestmatch::{Match, MatcherError, NestedPattern};
use tracing::debug;

mod cli;
mod config;
mod errors;
pub mod output;
mod telemetry;

use cli::{Cli, SelectionArgs};
use config::{OrthoSettingsLoader, Settings, SettingsLoader, split_arguments};
use errors::AppError;
pub use output::{OutputFormat, ResolvedOutputFormat};

/// Exit code reported when the input contains no match.
const NO_MATCH: u8 = 1;

/// Runs the CLI using the provided arguments and IO handles.
///
/// Input is read from the file named on the command line, or from `stdin`
/// when none is given.
#[must_use]
pub fn run<I, R, W, E>(
    args: I,
    stdin: &mut R,
    stdout: &mut W,
    stderr: &mut E,
    stdout_is_terminal: bool,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: Read,
    W: Write,
    E: Write,
{
    let mut streams = Streams {
        stdin,
        stdout,
        stdout_is_terminal,
    };
    run_with_loader(args, &mut streams, stderr, &OrthoSettingsLoader)
}

/// Input and match output of one run.
pub(crate) struct Streams<'a, R: Read, W: Write> {
    pub(crate) stdin: &'a mut R,
    pub(crate) stdout: &'a mut W,
    pub(crate) stdout_is_terminal: bool,
}

/// Runs the CLI with a custom settings loader.
pub(crate) fn run_with_loader<I, R, W, E, L>(
    args: I,
    streams: &mut Streams<'_, R, W>,
    stderr: &mut E,
    loader: &L,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: Read,
    W: Write,
    E: Write,
    L: SettingsLoader,
{
    let args: Vec<OsString> = args.into_iter().collect();
    let split = split_arguments(&args);
    let cli = match Cli::try_parse_from(&split.command) {
        Ok(cli) => cli,
        Err(error) => return report_usage(&error, streams.stdout, stderr),
    };

    let outcome = loader.load(&split.settings).and_then(|settings| {
        telemetry::in_scope(&settings, || execute(&settings, &cli, streams))
    });
    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(NO_MATCH),
        Err(error) => {
            report(stderr, format_args!("nestmatch: {error}\n"));
            ExitCode::FAILURE
        }
    }
}

/// Help and version requests go to stdout and succeed; usage errors fail.
fn report_usage<W: Write, E: Write>(error: &clap::Error, stdout: &mut W, stderr: &mut E) -> ExitCode {
    if error.use_stderr() {
        report(stderr, format_args!("{}", error.render()));
        ExitCode::FAILURE
    } else {
        report(stdout, format_args!("{}", error.render()));
        ExitCode::SUCCESS
    }
}

/// Writes a diagnostic; a closed stream leaves nothing else to tell.
fn report<W: Write>(stream: &mut W, message: fmt::Arguments<'_>) {
    if let Err(error) = stream.write_fmt(message) {
        debug!(%error, "failed to write diagnostic");
    }
}

/// Returns whether anything matched.
fn execute<R: Read, W: Write>(
    settings: &Settings,
    cli: &Cli,
    streams: &mut Streams<'_, R, W>,
) -> Result<bool, AppError> {
    let pattern = NestedPattern::new(settings.matcher_config()?)?;
    let input = read_input(cli.file.as_deref(), streams.stdin)?;
    let matches = select(&pattern, &input, &cli.selection)?;
    debug!(matches = matches.len(), bytes = input.len(), "matching finished");

    let format = cli.output.resolve(streams.stdout_is_terminal);
    if cli.selection.count {
        output::write_count(streams.stdout, format, matches.len())?;
    } else {
        output::write_matches(streams.stdout, format, &matches)?;
    }
    Ok(!matches.is_empty())
}

fn select<'h>(
    pattern: &NestedPattern,
    input: &'h str,
    selection: &SelectionArgs,
) -> Result<Vec<Match<'h>>, MatcherError> {
    selection.offset.map_or_else(
        || pattern.get_matches(input, selection.window()),
        |offset| pattern.all_matches(input, offset),
    )
}

fn read_input<R: Read>(file: Option<&Path>, stdin: &mut R) -> Result<String, AppError> {
    match file {
        Some(path) => fs::read_to_string(path).map_err(|source| AppError::ReadInput {
            origin: path.display().to_string(),
            source,
        }),
        None => {
            let mut buffer = String::new();
            stdin
                .read_to_string(&mut buffer)
                .map_err(|source| AppError::ReadInput {
                    origin: String::from("standard input"),
                    source,
                })?;
            Ok(buffer)
        }
    }
}

#[cfg(test)]
mod tests;
