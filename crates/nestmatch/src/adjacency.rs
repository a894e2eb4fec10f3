//! Prepend/append constraints on the text touching a span's markers.
//!
//! A span survives only if the prefix pattern ends exactly where its opening
//! begins and the suffix pattern begins exactly where its closing ends.
//! Surviving spans have the adjacent text folded into their markers so the
//! combined pattern reports it as part of the match.  Pruning never re-pairs:
//! each span is judged on its own markers and the remaining spans keep their
//! relative order.

use nestmatch_core::RegexPattern;
use tracing::debug;

use crate::pairing::Span;

/// Compiled adjacency constraints.
#[derive(Debug, Clone, Default)]
pub(crate) struct Adjacency {
    /// Prefix pattern anchored to the end of the searched text.
    prefix: Option<RegexPattern>,
    suffix: Option<RegexPattern>,
}

impl Adjacency {
    /// Creates constraints from an end-anchored prefix and a plain suffix.
    pub(crate) const fn new(prefix: Option<RegexPattern>, suffix: Option<RegexPattern>) -> Self {
        Self { prefix, suffix }
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.prefix.is_none() && self.suffix.is_none()
    }

    /// Keeps the spans meeting every constraint, widened to include the
    /// adjacent text.
    pub(crate) fn filter(&self, spans: Vec<Span>, haystack: &[u8]) -> Vec<Span> {
        if self.is_empty() {
            return spans;
        }
        let before = spans.len();
        let mut slots: Vec<Option<Span>> = spans.into_iter().map(Some).collect();

        if let Some(prefix) = &self.prefix {
            // Start-to-end over openings.
            let mut order: Vec<usize> = (0..slots.len()).collect();
            order.sort_by_key(|&index| opening_start(&slots, index));
            for index in order {
                if let Some(slot) = slots.get_mut(index) {
                    *slot = slot.take().and_then(|span| widen_opening(&span, prefix, haystack));
                }
            }
        }

        if let Some(suffix) = &self.suffix {
            // End-to-start over closings.
            let mut order: Vec<usize> = (0..slots.len()).collect();
            order.sort_by_key(|&index| std::cmp::Reverse(closing_end(&slots, index)));
            for index in order {
                if let Some(slot) = slots.get_mut(index) {
                    *slot = slot.take().and_then(|span| widen_closing(&span, suffix, haystack));
                }
            }
        }

        let kept: Vec<Span> = slots.into_iter().flatten().collect();
        debug!(
            before,
            kept = kept.len(),
            "applied adjacency constraints"
        );
        kept
    }
}

fn opening_start(slots: &[Option<Span>], index: usize) -> Option<usize> {
    slots
        .get(index)
        .and_then(Option::as_ref)
        .map(|span| span.opening().start())
}

fn closing_end(slots: &[Option<Span>], index: usize) -> Option<usize> {
    slots
        .get(index)
        .and_then(Option::as_ref)
        .map(|span| span.closing().end())
}

fn widen_opening(span: &Span, prefix: &RegexPattern, haystack: &[u8]) -> Option<Span> {
    let opening = span.opening();
    prefix
        .occurrence_ending_at(haystack, opening.start())
        .map(|adjacent| span.with_opening(adjacent.union(opening)))
}

fn widen_closing(span: &Span, suffix: &RegexPattern, haystack: &[u8]) -> Option<Span> {
    let closing = span.closing();
    suffix
        .occurrence_at(haystack, closing.end())
        .map(|adjacent| span.with_closing(closing.union(&adjacent)))
}
