//! Error types for the CLI runtime.

use std::io;
use std::sync::Arc;

use nestmatch::MatcherError;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("both --start and --end are required unless the configuration provides them")]
    MissingMarkers,
    #[error("invalid log filter `{directive}`: {reason}")]
    LogFilter { directive: String, reason: String },
    #[error("failed to read input from {origin}: {source}")]
    ReadInput { origin: String, source: io::Error },
    #[error(transparent)]
    Matcher(#[from] MatcherError),
    #[error("failed to serialise matches: {0}")]
    SerialiseOutput(serde_json::Error),
    #[error("failed to write output: {0}")]
    WriteOutput(io::Error),
}
