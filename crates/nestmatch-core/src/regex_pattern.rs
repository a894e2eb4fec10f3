//! Linear pattern primitive backed by the `regex` crate.
//!
//! Patterns are compiled as byte-oriented regular expressions so that the
//! default non-Unicode mode accepts constructs such as `.` that could match
//! part of a multi-byte character.  Offsets are byte offsets into the UTF-8
//! input.  A byte-level hit that splits a character cannot be reported as
//! text, so it is skipped.

use std::collections::BTreeMap;

use regex::bytes::{Captures, Regex, RegexBuilder};
use tracing::trace;

use crate::capture::Capture;
use crate::error::{PatternError, check_offset};
use crate::flags::PatternFlags;
use crate::match_result::Match;
use crate::matcher::PatternMatcher;
use crate::occurrence::Occurrence;

/// A compiled linear pattern.
///
/// # Example
///
/// ```
/// use nestmatch_core::{PatternFlags, RegexPattern};
///
/// let marker = RegexPattern::new("<", PatternFlags::default())?;
/// let hits = marker.occurrences(b"<a<b>>");
/// assert_eq!(hits.len(), 2);
/// assert_eq!(hits[1].start(), 2);
/// # Ok::<(), nestmatch_core::PatternError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RegexPattern {
    source: String,
    flags: PatternFlags,
    regex: Regex,
}

impl RegexPattern {
    /// Compiles `pattern` with the given mode flags.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidPattern`] if the pattern does not
    /// compile.
    pub fn new(pattern: &str, flags: PatternFlags) -> Result<Self, PatternError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(!flags.case_sensitive())
            .multi_line(flags.multi_line())
            .unicode(flags.unicode())
            .dot_matches_new_line(flags.dot_all())
            .build()
            .map_err(|error| PatternError::invalid_pattern(pattern, error.to_string()))?;
        trace!(pattern, "compiled pattern");
        Ok(Self {
            source: pattern.to_owned(),
            flags,
            regex,
        })
    }

    /// Returns the pattern source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the mode flags the pattern was compiled with.
    #[must_use]
    pub const fn flags(&self) -> PatternFlags {
        self.flags
    }

    /// Returns the names of the pattern's named groups in declaration order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.regex.capture_names().flatten()
    }

    /// Compiles a variant of this pattern that only matches at the very end
    /// of the searched text.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidPattern`] if the wrapped pattern does
    /// not compile.
    pub fn end_anchored(&self) -> Result<Self, PatternError> {
        Self::new(&format!(r"(?:{})\z", self.source), self.flags)
    }

    /// Enumerates every non-overlapping, non-empty occurrence in document
    /// order.
    #[must_use]
    pub fn occurrences(&self, haystack: &[u8]) -> Vec<Occurrence> {
        let found: Vec<Occurrence> = self
            .regex
            .captures_iter(haystack)
            .filter_map(|caps| self.occurrence_from(&caps))
            .filter(|occurrence| occurrence.end() > occurrence.start())
            .collect();
        trace!(pattern = %self.source, count = found.len(), "scanned occurrences");
        found
    }

    /// Returns the occurrence beginning exactly at `start`, if any.
    ///
    /// Text before `start` remains visible to look-behind assertions such as
    /// `\b`.
    #[must_use]
    pub fn occurrence_at(&self, haystack: &[u8], start: usize) -> Option<Occurrence> {
        if start > haystack.len() {
            return None;
        }
        self.regex
            .captures_at(haystack, start)
            .and_then(|caps| self.occurrence_from(&caps))
            .filter(|occurrence| occurrence.start() == start)
    }

    /// Returns the leftmost occurrence ending exactly at `end`, if any.
    ///
    /// Only the text before `end` is searched, so this is exact for patterns
    /// built with [`RegexPattern::end_anchored`].
    #[must_use]
    pub fn occurrence_ending_at(&self, haystack: &[u8], end: usize) -> Option<Occurrence> {
        let head = haystack.get(..end)?;
        self.regex
            .captures(head)
            .and_then(|caps| self.occurrence_from(&caps))
            .filter(|occurrence| occurrence.end() == end)
    }

    /// Returns the match beginning exactly at `start` within `source[..end]`.
    ///
    /// Text before `start` stays visible to look-behind assertions, and
    /// nothing after `end` can take part in the match.
    #[must_use]
    pub fn match_within<'h>(&self, source: &'h str, start: usize, end: usize) -> Option<Match<'h>> {
        let haystack = source.as_bytes().get(..end)?;
        if start > end {
            return None;
        }
        self.regex
            .captures_at(haystack, start)
            .and_then(|caps| self.match_from(source, &caps))
            .filter(|found| found.start() == start)
    }

    fn occurrence_from(&self, caps: &Captures<'_>) -> Option<Occurrence> {
        let whole = caps.get(0)?;
        let groups: BTreeMap<String, _> = self
            .group_names()
            .filter_map(|name| caps.name(name).map(|group| (name.to_owned(), group.range())))
            .collect();
        Some(Occurrence::with_groups(whole.range(), groups))
    }

    /// Converts captures to a match, or `None` if the whole match splits a
    /// character. Groups that split a character are left out.
    fn match_from<'h>(&self, source: &'h str, caps: &Captures<'_>) -> Option<Match<'h>> {
        let whole = caps.get(0)?;
        let captures = self
            .group_names()
            .filter_map(|name| {
                caps.name(name)
                    .and_then(|group| Capture::new(group.range(), source))
                    .map(|capture| (name.to_owned(), capture))
            })
            .collect();
        let found = Match::new(whole.range(), source, captures);
        if found.is_none() {
            trace!(pattern = %self.source, range = ?whole.range(), "skipped match inside a character");
        }
        found
    }
}

impl PartialEq for RegexPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl Eq for RegexPattern {}

impl PatternMatcher for RegexPattern {
    fn find_first<'h>(&self, haystack: &'h str) -> Option<Match<'h>> {
        self.regex
            .captures_iter(haystack.as_bytes())
            .find_map(|caps| self.match_from(haystack, &caps))
    }

    fn find_all<'h>(&self, haystack: &'h str) -> Vec<Match<'h>> {
        self.regex
            .captures_iter(haystack.as_bytes())
            .filter_map(|caps| self.match_from(haystack, &caps))
            .collect()
    }

    fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack.as_bytes())
    }

    fn match_prefix<'h>(
        &self,
        haystack: &'h str,
        start: usize,
    ) -> Result<Option<Match<'h>>, PatternError> {
        check_offset(haystack, start)?;
        Ok(self
            .regex
            .captures_at(haystack.as_bytes(), start)
            .and_then(|caps| self.match_from(haystack, &caps))
            .filter(|found| found.start() == start))
    }
}
