//! Tests for [`Window`].

use rstest::rstest;

use crate::{MatcherError, Window};

#[rstest]
#[case(Window::all(), vec![0, 1, 2, 3])]
#[case(Window::first(), vec![0])]
#[case(Window::last(), vec![3])]
#[case(Window::nth(2, false), vec![2])]
#[case(Window::nth(1, true), vec![2])]
#[case(Window::new(1, None, false), vec![1, 2, 3])]
#[case(Window::new(1, Some(2), true), vec![2, 1])]
#[case(Window::new(9, None, false), vec![])]
fn select_applies_index_range(#[case] window: Window, #[case] expected: Vec<u32>) {
    assert_eq!(window.select(vec![0, 1, 2, 3]), expected);
}

#[test]
fn stop_before_start_is_rejected() {
    let error = Window::new(3, Some(1), false)
        .validate()
        .expect_err("invalid window");
    assert_eq!(error, MatcherError::invalid_window(3, 1));
}

#[test]
fn unbounded_window_is_valid() {
    assert!(Window::new(7, None, true).validate().is_ok());
}
