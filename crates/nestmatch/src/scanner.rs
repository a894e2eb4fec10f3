//! Marker scanning: every occurrence of the start and end markers.

use nestmatch_core::{Occurrence, RegexPattern};
use tracing::debug;

/// Occurrences of both markers in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct MarkerScan {
    pub(crate) openings: Vec<Occurrence>,
    pub(crate) closings: Vec<Occurrence>,
}

/// Scans `haystack` for both markers.
pub(crate) fn scan(start: &RegexPattern, end: &RegexPattern, haystack: &[u8]) -> MarkerScan {
    let openings = start.occurrences(haystack);
    let closings = end.occurrences(haystack);
    debug!(
        openings = openings.len(),
        closings = closings.len(),
        "scanned markers"
    );
    MarkerScan { openings, closings }
}
