//! Tests for the balance pairing engine.

use nestmatch_core::Occurrence;
use rstest::rstest;

use crate::events::DelimiterEvent;
use crate::pairing::{Inclusion, pair};

/// Builds single-byte events from a string of `<` and `>` with filler.
fn events_for(text: &str) -> Vec<DelimiterEvent> {
    text.bytes()
        .enumerate()
        .filter_map(|(offset, byte)| {
            let occurrence = Occurrence::new(offset..offset + 1);
            match byte {
                b'<' => Some(DelimiterEvent::Opening(occurrence)),
                b'>' => Some(DelimiterEvent::Closing(occurrence)),
                _ => None,
            }
        })
        .collect()
}

fn extents(text: &str, inclusion: Inclusion) -> Vec<(usize, usize, usize)> {
    pair(&events_for(text), inclusion)
        .iter()
        .map(|span| (span.extent().start, span.extent().end, span.depth()))
        .collect()
}

#[test]
fn top_level_keeps_only_outermost_spans() {
    assert_eq!(
        extents("<a<b<c><d>>>", Inclusion::TopLevel),
        vec![(0, 12, 1)]
    );
}

#[test]
fn all_depths_reports_spans_in_closing_order() {
    assert_eq!(
        extents("<a<b<c><d>>>", Inclusion::AllDepths),
        vec![(4, 7, 3), (7, 10, 3), (2, 11, 2), (0, 12, 1)]
    );
}

#[rstest]
#[case("<a><b>", vec![(0, 3, 1), (3, 6, 1)])]
#[case("<a>>", vec![(0, 3, 1)])]
#[case("<<a>", vec![])]
fn stray_markers_are_ignored(#[case] text: &str, #[case] expected: Vec<(usize, usize, usize)>) {
    assert_eq!(extents(text, Inclusion::TopLevel), expected);
}

#[test]
fn single_pair_bypasses_the_stack() {
    assert_eq!(extents("x<y>z", Inclusion::TopLevel), vec![(1, 4, 1)]);
}

#[test]
fn closing_inside_the_open_marker_is_ignored() {
    let events = vec![
        DelimiterEvent::Opening(Occurrence::new(0..4)),
        DelimiterEvent::Closing(Occurrence::new(2..3)),
        DelimiterEvent::Closing(Occurrence::new(6..7)),
    ];
    let spans = pair(&events, Inclusion::TopLevel);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans.first().map(crate::Span::extent), Some(0..7));
}
