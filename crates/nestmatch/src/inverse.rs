//! Inverse mode: matching only in the text outside every span.

use std::ops::Range;

use nestmatch_core::{Match, PatternMatcher, RegexPattern};
use tracing::debug;

use crate::pairing::Span;

/// Returns the ordered gaps left by the union of every span's extent.
pub(crate) fn complement(spans: &[Span], len: usize) -> Vec<Range<usize>> {
    let mut extents: Vec<Range<usize>> = spans.iter().map(Span::extent).collect();
    extents.sort_by_key(|extent| extent.start);

    let mut regions = Vec::new();
    let mut cursor = 0;
    for extent in extents {
        if extent.start > cursor {
            regions.push(cursor..extent.start);
        }
        cursor = cursor.max(extent.end);
    }
    if cursor < len {
        regions.push(cursor..len);
    }
    regions
}

/// Matches `pattern` independently inside each region of `source`.
pub(crate) fn inverse_matches<'h>(
    pattern: &RegexPattern,
    source: &'h str,
    regions: &[Range<usize>],
) -> Vec<Match<'h>> {
    let found: Vec<Match<'h>> = regions
        .iter()
        .filter_map(|region| {
            source
                .get(region.clone())
                .map(|text| (region.start, pattern.find_all(text)))
        })
        .flat_map(|(base, matches)| matches.into_iter().map(move |m| m.offset_by(base)))
        .collect();
    debug!(
        regions = regions.len(),
        matches = found.len(),
        "matched outside delimited spans"
    );
    found
}
