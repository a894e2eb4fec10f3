//! Error types for matcher construction and windowed queries.

use nestmatch_core::PatternError;
use thiserror::Error;

/// Errors from building or querying a [`NestedPattern`](crate::NestedPattern).
///
/// "No match" is never an error: queries return `None` or an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MatcherError {
    /// A required or supplied pattern is the empty string.
    #[error("the {field} pattern must not be empty")]
    EmptyPattern {
        /// Name of the configuration field.
        field: &'static str,
    },

    /// Start and end markers are the same pattern.
    #[error("start and end markers must differ, both are `{pattern}`")]
    IdenticalMarkers {
        /// The shared marker pattern.
        pattern: String,
    },

    /// The capture group name is shorter than two characters.
    #[error("capture group name `{name}` must be at least 2 characters long")]
    CaptureNameTooShort {
        /// The rejected name.
        name: String,
    },

    /// The capture group name is not a valid group identifier.
    #[error("capture group name `{name}` must start with a letter or `_` and contain only letters, digits, and `_`")]
    InvalidCaptureName {
        /// The rejected name.
        name: String,
    },

    /// A window whose stop index precedes its start index.
    #[error("window stop {stop} precedes start {start}")]
    InvalidWindow {
        /// First selected index.
        start: usize,
        /// Last selected index.
        stop: usize,
    },

    /// A pattern failed to compile or an offset was invalid.
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

impl MatcherError {
    /// Creates an empty pattern error.
    #[must_use]
    pub const fn empty_pattern(field: &'static str) -> Self {
        Self::EmptyPattern { field }
    }

    /// Creates an identical markers error.
    #[must_use]
    pub fn identical_markers(pattern: impl Into<String>) -> Self {
        Self::IdenticalMarkers {
            pattern: pattern.into(),
        }
    }

    /// Creates a capture name length error.
    #[must_use]
    pub fn capture_name_too_short(name: impl Into<String>) -> Self {
        Self::CaptureNameTooShort { name: name.into() }
    }

    /// Creates an invalid capture name error.
    #[must_use]
    pub fn invalid_capture_name(name: impl Into<String>) -> Self {
        Self::InvalidCaptureName { name: name.into() }
    }

    /// Creates an invalid window error.
    #[must_use]
    pub const fn invalid_window(start: usize, stop: usize) -> Self {
        Self::InvalidWindow { start, stop }
    }
}
