//! Capture types for match result bindings.
//!
//! A capture binds a named group of a pattern to the slice of the input it
//! matched.  The configured content group of a nested matcher is reported
//! the same way as any named group inside the marker patterns.

use std::ops::Range;

use serde::Serialize;

/// A named group bound to a region of the input.
///
/// # Example
///
/// ```
/// use nestmatch_core::Capture;
///
/// let source = "<body>";
/// let capture = Capture::new(1..5, source).expect("range on char boundaries");
/// assert_eq!(capture.text(), "body");
/// assert!(Capture::new(0..1, "é").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Capture<'h> {
    /// Byte range of the capture in the input.
    range: Range<usize>,
    /// Captured text, borrowed from the input.
    text: &'h str,
}

impl<'h> Capture<'h> {
    /// Creates a capture by slicing `source` at `range`.
    ///
    /// Returns `None` when `range` is out of bounds or splits a character.
    #[must_use]
    pub fn new(range: Range<usize>, source: &'h str) -> Option<Self> {
        let text = source.get(range.clone())?;
        Some(Self { range, text })
    }

    /// Returns the byte range of the capture.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Returns the captured text.
    #[must_use]
    pub const fn text(&self) -> &'h str {
        self.text
    }

    /// Returns the capture with its range moved forward by `delta` bytes.
    #[must_use]
    pub fn offset_by(self, delta: usize) -> Self {
        Self {
            range: (self.range.start + delta)..(self.range.end + delta),
            text: self.text,
        }
    }
}
