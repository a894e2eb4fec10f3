//! Match result type produced by every matcher.
//!
//! A [`Match`] represents one accepted region of the input, including its
//! byte range, the matched text, and named capture bindings.

use std::collections::BTreeMap;
use std::ops::Range;

use serde::Serialize;

use crate::capture::Capture;

/// A match result borrowed from the searched input.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use nestmatch_core::Match;
///
/// let source = "x<a>y";
/// let m = Match::new(1..4, source, BTreeMap::new()).expect("range on char boundaries");
/// assert_eq!(m.text(), "<a>");
/// assert_eq!(m.start(), 1);
/// assert!(m.captures().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match<'h> {
    /// Byte range of the whole match.
    range: Range<usize>,
    /// Matched text, borrowed from the input.
    text: &'h str,
    /// Named capture bindings keyed by group name.
    captures: BTreeMap<String, Capture<'h>>,
}

impl<'h> Match<'h> {
    /// Creates a match by slicing `source` at `range`.
    ///
    /// Returns `None` when `range` is out of bounds or splits a character,
    /// which byte-mode patterns such as `.` can produce on multi-byte text.
    #[must_use]
    pub fn new(
        range: Range<usize>,
        source: &'h str,
        captures: BTreeMap<String, Capture<'h>>,
    ) -> Option<Self> {
        let text = source.get(range.clone())?;
        Some(Self {
            range,
            text,
            captures,
        })
    }

    /// Returns the byte range of the match.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Returns the inclusive start offset.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.range.start
    }

    /// Returns the exclusive end offset.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.range.end
    }

    /// Returns the matched text.
    #[must_use]
    pub const fn text(&self) -> &'h str {
        self.text
    }

    /// Gets a capture by group name.
    #[must_use]
    pub fn capture(&self, name: &str) -> Option<&Capture<'h>> {
        self.captures.get(name)
    }

    /// Returns all capture bindings.
    #[must_use]
    pub const fn captures(&self) -> &BTreeMap<String, Capture<'h>> {
        &self.captures
    }

    /// Returns the match with every range moved forward by `delta` bytes.
    ///
    /// Used when a match was found in a suffix of a larger input.
    #[must_use]
    pub fn offset_by(self, delta: usize) -> Self {
        Self {
            range: (self.range.start + delta)..(self.range.end + delta),
            text: self.text,
            captures: self
                .captures
                .into_iter()
                .map(|(name, capture)| (name, capture.offset_by(delta)))
                .collect(),
        }
    }
}
