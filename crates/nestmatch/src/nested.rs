//! The nested delimiter matcher.
//!
//! [`NestedPattern`] compiles a [`MatcherConfig`] once and answers every
//! query as a pure function of the configuration, the input, and a
//! [`Window`].  The pipeline is: scan both markers, merge them into an event
//! stream, pair the events into spans, prune by adjacency, window the spans,
//! then materialise each selected span with the combined pattern.

use std::hash::{Hash, Hasher};

use nestmatch_core::{Match, PatternError, PatternMatcher, RegexPattern, check_offset};
use tracing::debug;

use crate::adjacency::Adjacency;
use crate::combined::combined_source;
use crate::config::{ConfigOverrides, MatcherConfig};
use crate::error::MatcherError;
use crate::events::event_stream;
use crate::inverse::{complement, inverse_matches};
use crate::materialize::materialize;
use crate::pairing::{Inclusion, Span, pair};
use crate::scanner::scan;
use crate::window::Window;

/// A compiled matcher for balanced, possibly nested, delimited regions.
///
/// The matcher is immutable and can be shared across threads.
///
/// # Example
///
/// ```
/// use nestmatch::{MatcherConfig, NestedPattern};
///
/// let config = MatcherConfig::new(r"\(", r"\)").with_capture_name("inner");
/// let pattern = NestedPattern::new(config)?;
/// let found = pattern.first_match("f(a, g(b)) + h(c)").expect("a call");
/// assert_eq!(found.text(), "(a, g(b))");
/// assert_eq!(found.capture("inner").map(|c| c.text()), Some("a, g(b)"));
/// # Ok::<(), nestmatch::MatcherError>(())
/// ```
#[derive(Debug, Clone)]
pub struct NestedPattern {
    config: MatcherConfig,
    start: RegexPattern,
    end: RegexPattern,
    adjacency: Adjacency,
    combined: RegexPattern,
    inverse: Option<RegexPattern>,
}

impl NestedPattern {
    /// Validates `config` and compiles every pattern it names.
    ///
    /// # Errors
    ///
    /// Returns a [`MatcherError`] when the configuration breaks a
    /// construction rule or a pattern does not compile.
    pub fn new(config: MatcherConfig) -> Result<Self, MatcherError> {
        config.validate()?;
        let flags = config.flags();
        let start = RegexPattern::new(config.start_marker(), flags)?;
        let end = RegexPattern::new(config.end_marker(), flags)?;
        let prefix = config
            .prepended()
            .map(|pattern| RegexPattern::new(pattern, flags)?.end_anchored())
            .transpose()?;
        let suffix = config
            .appended()
            .map(|pattern| RegexPattern::new(pattern, flags))
            .transpose()?;
        let combined = RegexPattern::new(&combined_source(&config), flags)?;
        let inverse = config
            .inverse_match()
            .map(|pattern| RegexPattern::new(pattern, flags))
            .transpose()?;
        Ok(Self {
            config,
            start,
            end,
            adjacency: Adjacency::new(prefix, suffix),
            combined,
            inverse,
        })
    }

    /// Returns the configuration this matcher was built from.
    #[must_use]
    pub const fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Returns the combined pattern applied to each span.
    #[must_use]
    pub const fn combined(&self) -> &RegexPattern {
        &self.combined
    }

    /// Builds a new matcher from this one's configuration with `overrides`
    /// applied.
    ///
    /// # Errors
    ///
    /// Returns a [`MatcherError`] if the derived configuration is invalid.
    pub fn copy_with(&self, overrides: ConfigOverrides) -> Result<Self, MatcherError> {
        Self::new(self.config.apply(overrides))
    }

    /// Returns the accepted spans in closing order.
    ///
    /// Spans honour the depth policy and the adjacency constraints; in
    /// inverse mode they are still the delimited regions, not results.
    #[must_use]
    pub fn spans(&self, input: &str) -> Vec<Span> {
        let spans = self.paired_spans(input, self.config.inclusion());
        self.adjacency.filter(spans, input.as_bytes())
    }

    /// Materialises a single span into a match.
    ///
    /// Returns `None` if the combined pattern does not reproduce the span.
    #[must_use]
    pub fn materialize<'h>(&self, input: &'h str, span: &Span) -> Option<Match<'h>> {
        materialize(&self.combined, input, span)
    }

    /// Returns the matches selected by `window`.
    ///
    /// This is the general primitive behind every other query.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::InvalidWindow`] for a window whose stop
    /// precedes its start.
    pub fn get_matches<'h>(
        &self,
        input: &'h str,
        window: Window,
    ) -> Result<Vec<Match<'h>>, MatcherError> {
        window.validate()?;
        if let Some(inverse) = &self.inverse {
            let spans = self.paired_spans(input, Inclusion::AllDepths);
            let regions = complement(&spans, input.len());
            return Ok(window.select(inverse_matches(inverse, input, &regions)));
        }
        let selected = window.select(self.spans(input));
        let matches: Vec<Match<'h>> = selected
            .iter()
            .filter_map(|span| self.materialize(input, span))
            .collect();
        debug!(
            selected = selected.len(),
            matches = matches.len(),
            "materialised spans"
        );
        Ok(matches)
    }

    /// Returns the first match in closing order.
    #[must_use]
    pub fn first_match<'h>(&self, input: &'h str) -> Option<Match<'h>> {
        self.single(input, Window::first())
    }

    /// Returns the last match in closing order.
    #[must_use]
    pub fn last_match<'h>(&self, input: &'h str) -> Option<Match<'h>> {
        self.single(input, Window::last())
    }

    /// Returns the match at `index`, counted from the end when `reverse`.
    #[must_use]
    pub fn nth_match<'h>(&self, index: usize, input: &'h str, reverse: bool) -> Option<Match<'h>> {
        self.single(input, Window::nth(index, reverse))
    }

    /// Returns every match in `input[start..]`.
    ///
    /// Offsets in the returned matches refer to the whole input.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::Pattern`] when `start` is past the end of the
    /// input or not on a character boundary.
    pub fn all_matches<'h>(
        &self,
        input: &'h str,
        start: usize,
    ) -> Result<Vec<Match<'h>>, MatcherError> {
        check_offset(input, start)?;
        let tail = input.get(start..).unwrap_or_default();
        Ok(self
            .get_matches(tail, Window::all())?
            .into_iter()
            .map(|found| found.offset_by(start))
            .collect())
    }

    /// Returns the text of the first match.
    #[must_use]
    pub fn string_match<'h>(&self, input: &'h str) -> Option<&'h str> {
        self.first_match(input).map(|found| found.text())
    }

    /// Returns the text of every match selected by `window`.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::InvalidWindow`] for a window whose stop
    /// precedes its start.
    pub fn string_matches<'h>(
        &self,
        input: &'h str,
        window: Window,
    ) -> Result<Vec<&'h str>, MatcherError> {
        Ok(self
            .get_matches(input, window)?
            .iter()
            .map(Match::text)
            .collect())
    }

    /// Tests the combined pattern against `input`.
    ///
    /// This skips pairing entirely, so it is a cheap approximation: it can
    /// report a match for unbalanced input that pairing would reject.
    #[must_use]
    pub fn has_match(&self, input: &str) -> bool {
        self.combined.is_match(input)
    }

    /// Tests the combined pattern at a fixed offset, without pairing.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::Pattern`] when `start` is not a character
    /// boundary of `input`.
    pub fn match_as_prefix<'h>(
        &self,
        input: &'h str,
        start: usize,
    ) -> Result<Option<Match<'h>>, MatcherError> {
        Ok(self.combined.match_prefix(input, start)?)
    }

    fn single<'h>(&self, input: &'h str, window: Window) -> Option<Match<'h>> {
        self.get_matches(input, window)
            .ok()
            .and_then(|matches| matches.into_iter().next())
    }

    fn paired_spans(&self, input: &str, inclusion: Inclusion) -> Vec<Span> {
        let haystack = input.as_bytes();
        event_stream(scan(&self.start, &self.end, haystack))
            .map(|events| pair(&events, inclusion))
            .unwrap_or_default()
    }
}

impl PartialEq for NestedPattern {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl Eq for NestedPattern {}

impl Hash for NestedPattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.config.hash(state);
    }
}

impl PatternMatcher for NestedPattern {
    fn find_first<'h>(&self, haystack: &'h str) -> Option<Match<'h>> {
        self.first_match(haystack)
    }

    fn find_all<'h>(&self, haystack: &'h str) -> Vec<Match<'h>> {
        self.get_matches(haystack, Window::all()).unwrap_or_default()
    }

    fn is_match(&self, haystack: &str) -> bool {
        self.has_match(haystack)
    }

    fn match_prefix<'h>(
        &self,
        haystack: &'h str,
        start: usize,
    ) -> Result<Option<Match<'h>>, PatternError> {
        self.combined.match_prefix(haystack, start)
    }
}
