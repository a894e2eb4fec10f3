//! Diagnostics for a single run, written to stderr.
//!
//! The subscriber is only the default while the run's work executes, so
//! every call to [`crate::run`] honours its own filter and format and
//! nothing global is left behind.

use std::io::{self, IsTerminal};

use tracing::subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;

use crate::config::{LogFormat, Settings};
use crate::errors::AppError;

/// Runs `work` with a subscriber built from the logging settings.
pub(crate) fn in_scope<T>(
    settings: &Settings,
    work: impl FnOnce() -> Result<T, AppError>,
) -> Result<T, AppError> {
    let directive = settings.log_filter();
    let filter = EnvFilter::try_new(directive).map_err(|error| AppError::LogFilter {
        directive: directive.to_owned(),
        reason: error.to_string(),
    })?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal());
    match settings.log_format() {
        LogFormat::Compact => {
            subscriber::with_default(builder.compact().without_time().finish(), work)
        }
        LogFormat::Json => subscriber::with_default(
            builder
                .json()
                .flatten_event(true)
                .with_timer(UtcTime::rfc_3339())
                .finish(),
            work,
        ),
    }
}
