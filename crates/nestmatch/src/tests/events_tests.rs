//! Tests for the delimiter event stream.

use nestmatch_core::Occurrence;

use crate::events::{DelimiterEvent, event_stream};
use crate::scanner::MarkerScan;

fn occurrences(ranges: &[(usize, usize)]) -> Vec<Occurrence> {
    ranges
        .iter()
        .map(|&(start, end)| Occurrence::new(start..end))
        .collect()
}

fn roles(events: &[DelimiterEvent]) -> String {
    events
        .iter()
        .map(|event| match event {
            DelimiterEvent::Opening(o) => format!("o{}", o.start()),
            DelimiterEvent::Closing(c) => format!("c{}", c.start()),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn missing_markers_yield_no_stream() {
    let no_openings = MarkerScan {
        openings: Vec::new(),
        closings: occurrences(&[(1, 2)]),
    };
    let no_closings = MarkerScan {
        openings: occurrences(&[(0, 1)]),
        closings: Vec::new(),
    };
    assert!(event_stream(no_openings).is_none());
    assert!(event_stream(no_closings).is_none());
}

#[test]
fn closings_before_first_opening_are_dropped() {
    let scan = MarkerScan {
        openings: occurrences(&[(2, 3)]),
        closings: occurrences(&[(0, 1), (4, 5)]),
    };
    let events = event_stream(scan).expect("events");
    assert_eq!(roles(&events), "o2 c4");
}

#[test]
fn only_early_closings_yield_no_stream() {
    let scan = MarkerScan {
        openings: occurrences(&[(5, 6)]),
        closings: occurrences(&[(0, 1), (2, 3)]),
    };
    assert!(event_stream(scan).is_none());
}

#[test]
fn longer_list_is_truncated_from_the_back() {
    let scan = MarkerScan {
        openings: occurrences(&[(0, 1), (2, 3), (7, 8)]),
        closings: occurrences(&[(4, 5), (5, 6)]),
    };
    let events = event_stream(scan).expect("events");
    assert_eq!(roles(&events), "o0 o2 c4 c5");
}

#[test]
fn closing_sorts_before_opening_at_equal_offsets() {
    let scan = MarkerScan {
        openings: occurrences(&[(0, 1), (2, 3)]),
        closings: occurrences(&[(2, 4), (6, 7)]),
    };
    let events = event_stream(scan).expect("events");
    assert_eq!(roles(&events), "o0 c2 o2 c6");
}
