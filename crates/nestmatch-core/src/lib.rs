//! Core data model and pattern primitive for the nestmatch delimiter engine.
//!
//! This crate provides the canonical type definitions used throughout the
//! nestmatch pipeline: marker occurrences, match results, capture bindings,
//! pattern mode flags, and the linear pattern primitive that every higher
//! layer is built on.  It is re-exported by the `nestmatch` facade crate for
//! stable public consumption.
//!
//! # Core types
//!
//! - [`Occurrence`]: one marker hit as a half-open byte range
//! - [`Match`] and [`Capture`]: a materialised match with named captures
//! - [`PatternFlags`]: case, line, Unicode, and dot-all modes
//! - [`RegexPattern`]: the linear pattern primitive backed by `regex`
//! - [`PatternMatcher`]: the capability interface shared by plain and
//!   nested matchers
//! - [`PatternError`]: invalid patterns and offsets
//!
//! # Example
//!
//! ```
//! use nestmatch_core::{PatternFlags, PatternMatcher, RegexPattern};
//!
//! let pattern = RegexPattern::new(r"<(?P<tag>\w+)>", PatternFlags::default())?;
//! let found = pattern.find_first("say <hello>").expect("one match");
//! assert_eq!(found.text(), "<hello>");
//! assert_eq!(found.capture("tag").map(|c| c.text()), Some("hello"));
//! # Ok::<(), nestmatch_core::PatternError>(())
//! ```

mod capture;
mod error;
mod flags;
mod match_result;
mod matcher;
mod occurrence;
mod regex_pattern;

pub use capture::Capture;
pub use error::{PatternError, check_offset};
pub use flags::PatternFlags;
pub use match_result::Match;
pub use matcher::PatternMatcher;
pub use occurrence::Occurrence;
pub use regex_pattern::RegexPattern;

#[cfg(test)]
mod tests;
