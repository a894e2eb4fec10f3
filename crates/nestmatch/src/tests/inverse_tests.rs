//! Tests for inverse-mode region computation.

use nestmatch_core::{Occurrence, PatternFlags, RegexPattern};

use crate::inverse::{complement, inverse_matches};
use crate::pairing::Span;

fn span(start: usize, end: usize) -> Span {
    Span::new(
        Occurrence::new(start..start + 1),
        Occurrence::new(end - 1..end),
        1,
    )
}

#[test]
fn complement_of_no_spans_is_whole_input() {
    assert_eq!(complement(&[], 5), vec![0..5]);
}

#[test]
fn complement_skips_nested_and_overlapping_extents() {
    let spans = vec![span(3, 5), span(1, 8), span(10, 12)];
    assert_eq!(complement(&spans, 14), vec![0..1, 8..10, 12..14]);
}

#[test]
fn complement_omits_empty_edges() {
    let spans = vec![span(0, 4)];
    assert_eq!(complement(&spans, 4), Vec::<std::ops::Range<usize>>::new());
}

#[test]
fn matches_are_reported_against_the_whole_input() {
    let letters = RegexPattern::new("[a-z]+", PatternFlags::default()).expect("compile");
    let source = "ab<cd>ef";
    let found = inverse_matches(&letters, source, &[0..2, 6..8]);
    let pairs: Vec<_> = found.iter().map(|m| (m.start(), m.text())).collect();
    assert_eq!(pairs, vec![(0, "ab"), (6, "ef")]);
}
