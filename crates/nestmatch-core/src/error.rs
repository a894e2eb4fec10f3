//! Error types for pattern compilation and offset handling.

use thiserror::Error;

/// Errors raised by the pattern primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PatternError {
    /// The pattern source could not be compiled.
    #[error("invalid pattern `{pattern}`: {message}")]
    InvalidPattern {
        /// The offending pattern source.
        pattern: String,
        /// Description of the compilation failure.
        message: String,
    },

    /// A byte offset lies outside the input or inside a UTF-8 sequence.
    #[error("offset {offset} is not a character boundary of an input of {len} bytes")]
    InvalidOffset {
        /// The rejected offset.
        offset: usize,
        /// Length of the input in bytes.
        len: usize,
    },
}

impl PatternError {
    /// Creates an invalid pattern error.
    #[must_use]
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid offset error.
    #[must_use]
    pub const fn invalid_offset(offset: usize, len: usize) -> Self {
        Self::InvalidOffset { offset, len }
    }
}

/// Checks that `offset` is a character boundary of `source`.
///
/// The end of the input counts as a boundary.
///
/// # Errors
///
/// Returns [`PatternError::InvalidOffset`] when the offset is past the end of
/// the input or splits a multi-byte character.
pub fn check_offset(source: &str, offset: usize) -> Result<(), PatternError> {
    if source.is_char_boundary(offset) {
        Ok(())
    } else {
        Err(PatternError::invalid_offset(offset, source.len()))
    }
}
