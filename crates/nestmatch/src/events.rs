//! Merges marker occurrences into one ordered delimiter event stream.

use std::cmp::Ordering;

use nestmatch_core::Occurrence;
use tracing::debug;

use crate::scanner::MarkerScan;

/// One delimiter event: a marker occurrence tagged with its role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DelimiterEvent {
    /// An occurrence of the start marker.
    Opening(Occurrence),
    /// An occurrence of the end marker.
    Closing(Occurrence),
}

impl DelimiterEvent {
    pub(crate) const fn occurrence(&self) -> &Occurrence {
        match self {
            Self::Opening(occurrence) | Self::Closing(occurrence) => occurrence,
        }
    }

    /// Sort rank at equal start offsets: closings before openings.
    const fn tie_rank(&self) -> u8 {
        match self {
            Self::Closing(_) => 0,
            Self::Opening(_) => 1,
        }
    }

    fn stream_order(&self, other: &Self) -> Ordering {
        self.occurrence()
            .start()
            .cmp(&other.occurrence().start())
            .then_with(|| self.tie_rank().cmp(&other.tie_rank()))
    }
}

/// Builds the event stream, or `None` when nothing can pair.
///
/// Closings that begin before the first opening are dropped.  When the
/// remaining lists differ in length the longer one is cut to the length of
/// the shorter one, keeping its front.
pub(crate) fn event_stream(scan: MarkerScan) -> Option<Vec<DelimiterEvent>> {
    let MarkerScan {
        mut openings,
        closings,
    } = scan;
    let first_start = openings.first()?.start();
    let mut closings: Vec<Occurrence> = closings
        .into_iter()
        .skip_while(|closing| closing.start() < first_start)
        .collect();
    if closings.is_empty() {
        return None;
    }

    let kept = openings.len().min(closings.len());
    if openings.len() != closings.len() {
        debug!(
            openings = openings.len(),
            closings = closings.len(),
            kept,
            "truncating unbalanced marker lists"
        );
    }
    openings.truncate(kept);
    closings.truncate(kept);

    let mut events: Vec<DelimiterEvent> = openings
        .into_iter()
        .map(DelimiterEvent::Opening)
        .chain(closings.into_iter().map(DelimiterEvent::Closing))
        .collect();
    events.sort_by(DelimiterEvent::stream_order);
    Some(events)
}
