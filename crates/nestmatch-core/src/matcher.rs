//! Capability interface shared by every matcher.

use crate::error::PatternError;
use crate::match_result::Match;

/// Finds matches of a pattern in text.
///
/// Both the plain [`RegexPattern`](crate::RegexPattern) adapter and the
/// nested delimiter engine implement this trait, so callers can depend on
/// `&dyn PatternMatcher` and swap one for the other.
pub trait PatternMatcher {
    /// Returns the first match in `haystack`, if any.
    fn find_first<'h>(&self, haystack: &'h str) -> Option<Match<'h>>;

    /// Returns every match in `haystack` in the matcher's natural order.
    fn find_all<'h>(&self, haystack: &'h str) -> Vec<Match<'h>>;

    /// Returns whether `haystack` contains a match.
    fn is_match(&self, haystack: &str) -> bool;

    /// Returns the match beginning exactly at `start`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidOffset`] when `start` is not a
    /// character boundary of `haystack`.
    fn match_prefix<'h>(
        &self,
        haystack: &'h str,
        start: usize,
    ) -> Result<Option<Match<'h>>, PatternError>;
}
