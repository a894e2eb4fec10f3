//! Marker occurrence values produced by the pattern primitive.

use std::collections::BTreeMap;
use std::ops::Range;

use serde::Serialize;

/// One occurrence of a marker pattern in the input.
///
/// The byte range is half-open. Occurrences are never mutated; widening an
/// occurrence with adjacent text produces a new value via
/// [`Occurrence::union`].
///
/// # Example
///
/// ```
/// use nestmatch_core::Occurrence;
///
/// let prefix = Occurrence::new(3..4);
/// let marker = Occurrence::new(4..5);
/// let widened = prefix.union(&marker);
/// assert_eq!(widened.range(), 3..5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Occurrence {
    /// Byte range covered by the occurrence.
    range: Range<usize>,
    /// Named groups of the marker pattern that participated in the match.
    groups: BTreeMap<String, Range<usize>>,
}

impl Occurrence {
    /// Creates an occurrence without named groups.
    #[must_use]
    pub const fn new(range: Range<usize>) -> Self {
        Self {
            range,
            groups: BTreeMap::new(),
        }
    }

    /// Creates an occurrence carrying named group ranges.
    #[must_use]
    pub const fn with_groups(range: Range<usize>, groups: BTreeMap<String, Range<usize>>) -> Self {
        Self { range, groups }
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

    /// Returns the byte range.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Returns the named group ranges.
    #[must_use]
    pub const fn groups(&self) -> &BTreeMap<String, Range<usize>> {
        &self.groups
    }

    /// Returns the range bound to a named group, if it participated.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<Range<usize>> {
        self.groups.get(name).cloned()
    }

    /// Returns the smallest occurrence covering both `self` and `other`.
    ///
    /// Groups from both sides are kept; on a name clash the group of
    /// `other` wins.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let start = self.start().min(other.start());
        let end = self.end().max(other.end());
        let mut groups = self.groups.clone();
        groups.extend(other.groups.clone());
        Self::with_groups(start..end, groups)
    }
}
