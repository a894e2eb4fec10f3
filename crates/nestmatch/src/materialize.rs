//! Re-applies the combined pattern to one span.
//!
//! The search is anchored at the span's opening start and the input is cut
//! at the span's closing end.  Text before the span stays in place, so
//! look-behind assertions and line anchors see the real input, but none of
//! it can become part of the match.

use nestmatch_core::{Match, RegexPattern};
use tracing::trace;

use crate::pairing::Span;

/// Produces the match for `span`, or `None` if the combined pattern does
/// not reproduce it.
pub(crate) fn materialize<'h>(
    combined: &RegexPattern,
    source: &'h str,
    span: &Span,
) -> Option<Match<'h>> {
    let extent = span.extent();
    let found = combined.match_within(source, extent.start, extent.end);
    if found.is_none() {
        trace!(?extent, "combined pattern did not reproduce span");
    }
    found
}
