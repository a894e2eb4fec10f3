//! Nestmatch: balanced, nested delimiter matching on top of linear patterns.
//!
//! Regular expressions cannot describe balanced nesting.  This crate pairs
//! start and end marker occurrences with a stack, optionally filters the
//! resulting spans by the text adjacent to their markers, and re-applies a
//! combined pattern to every accepted span to produce structured matches.
//! An inverse mode matches a pattern only in the text outside every span.
//!
//! This facade crate re-exports the stable types from [`nestmatch_core`] and
//! provides the [`NestedPattern`] entrypoint.
//!
//! # Core types
//!
//! - [`MatcherConfig`] and [`ConfigOverrides`]: immutable matcher settings
//! - [`NestedPattern`]: the compiled delimiter matcher
//! - [`Span`] and [`Inclusion`]: paired markers and the depth policy
//! - [`Window`]: index-based selection over the ordered matches
//! - [`Match`] and [`Capture`]: materialised results
//! - [`PatternMatcher`]: the interface shared with [`RegexPattern`]
//!
//! # Example
//!
//! ```
//! use nestmatch::{MatcherConfig, NestedPattern};
//!
//! let config = MatcherConfig::new("<", ">").with_global(true);
//! let pattern = NestedPattern::new(config)?;
//! let texts: Vec<&str> = pattern
//!     .all_matches("<a<b>>", 0)?
//!     .iter()
//!     .map(|m| m.text())
//!     .collect();
//! assert_eq!(texts, vec!["<b>", "<a<b>>"]);
//! # Ok::<(), nestmatch::MatcherError>(())
//! ```

mod adjacency;
mod combined;
mod config;
mod error;
mod events;
mod inverse;
mod materialize;
mod nested;
mod pairing;
mod scanner;
mod window;

// Re-export all stable types from nestmatch_core.
pub use nestmatch_core::{
    Capture, Match, Occurrence, PatternError, PatternFlags, PatternMatcher, RegexPattern,
};

pub use config::{ConfigOverrides, MatcherConfig};
pub use error::MatcherError;
pub use nested::NestedPattern;
pub use pairing::{Inclusion, Span};
pub use window::Window;

#[cfg(test)]
mod tests;
