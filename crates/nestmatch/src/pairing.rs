//! Stack-based pairing of delimiter events into balanced spans.

use std::ops::Range;

use nestmatch_core::Occurrence;
use serde::Serialize;
use tracing::debug;

use crate::events::DelimiterEvent;

/// Which nesting depths produce spans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Inclusion {
    /// Only spans whose opening was the outermost open marker.
    #[default]
    TopLevel,
    /// Spans at every depth.
    AllDepths,
}

/// A paired opening and closing marker.
///
/// Spans are immutable; adjacency widening builds a new value with
/// [`Span::with_opening`] or [`Span::with_closing`].
///
/// # Example
///
/// ```
/// use nestmatch::{MatcherConfig, NestedPattern};
///
/// let pattern = NestedPattern::new(MatcherConfig::new("<", ">"))?;
/// let spans = pattern.spans("x<a<b>>");
/// assert_eq!(spans.len(), 1);
/// assert_eq!(spans[0].extent(), 1..7);
/// assert_eq!(spans[0].depth(), 1);
/// # Ok::<(), nestmatch::MatcherError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    opening: Occurrence,
    closing: Occurrence,
    depth: usize,
}

impl Span {
    /// Creates a span from its markers and nesting depth.
    #[must_use]
    pub const fn new(opening: Occurrence, closing: Occurrence, depth: usize) -> Self {
        Self {
            opening,
            closing,
            depth,
        }
    }

    /// Returns the opening marker occurrence.
    #[must_use]
    pub const fn opening(&self) -> &Occurrence {
        &self.opening
    }

    /// Returns the closing marker occurrence.
    #[must_use]
    pub const fn closing(&self) -> &Occurrence {
        &self.closing
    }

    /// Returns the nesting depth, 1 for top-level spans.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the bytes covered from the opening start to the closing end.
    #[must_use]
    pub const fn extent(&self) -> Range<usize> {
        self.opening.start()..self.closing.end()
    }

    /// Returns a copy with the opening replaced.
    #[must_use]
    pub fn with_opening(&self, opening: Occurrence) -> Self {
        Self::new(opening, self.closing.clone(), self.depth)
    }

    /// Returns a copy with the closing replaced.
    #[must_use]
    pub fn with_closing(&self, closing: Occurrence) -> Self {
        Self::new(self.opening.clone(), closing, self.depth)
    }
}

/// Pairs `events` into spans, in the order their closings are consumed.
///
/// A closing pops the most recent unclosed opening and is recorded when the
/// policy is [`Inclusion::AllDepths`] or the opening was the only one open.
/// A closing with nothing open, or one ending inside the open marker, is
/// ignored.  Openings left on the stack produce nothing.
pub(crate) fn pair(events: &[DelimiterEvent], inclusion: Inclusion) -> Vec<Span> {
    if let [DelimiterEvent::Opening(opening), DelimiterEvent::Closing(closing)] = events {
        return if closing.end() >= opening.end() {
            vec![Span::new(opening.clone(), closing.clone(), 1)]
        } else {
            Vec::new()
        };
    }

    let mut stack: Vec<&Occurrence> = Vec::new();
    let mut spans = Vec::new();
    for event in events {
        match event {
            DelimiterEvent::Opening(opening) => stack.push(opening),
            DelimiterEvent::Closing(closing) => {
                let depth = stack.len();
                let Some(opening) = stack.last().copied() else {
                    continue;
                };
                if closing.end() < opening.end() {
                    continue;
                }
                stack.pop();
                if inclusion == Inclusion::AllDepths || depth == 1 {
                    spans.push(Span::new(opening.clone(), closing.clone(), depth));
                }
            }
        }
    }
    debug!(
        spans = spans.len(),
        unclosed = stack.len(),
        ?inclusion,
        "paired delimiters"
    );
    spans
}
