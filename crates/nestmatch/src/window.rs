//! Index-based selection over an ordered result list.

use crate::error::MatcherError;

/// An inclusive range of result indices, optionally counted from the end.
///
/// Indices refer to positions in the requested order, not text offsets:
/// index 0 is the first result in closing order, or the last one when
/// `reverse` is set.
///
/// # Example
///
/// ```
/// use nestmatch::Window;
///
/// assert_eq!(Window::first(), Window::new(0, Some(0), false));
/// assert_eq!(Window::last(), Window::new(0, Some(0), true));
/// assert_eq!(Window::nth(3, false), Window::new(3, Some(3), false));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Window {
    start: usize,
    stop: Option<usize>,
    reverse: bool,
}

impl Window {
    /// Creates a window over `[start, stop]`; `None` means "to the end".
    #[must_use]
    pub const fn new(start: usize, stop: Option<usize>, reverse: bool) -> Self {
        Self {
            start,
            stop,
            reverse,
        }
    }

    /// Selects every result.
    #[must_use]
    pub const fn all() -> Self {
        Self::new(0, None, false)
    }

    /// Selects the first result.
    #[must_use]
    pub const fn first() -> Self {
        Self::new(0, Some(0), false)
    }

    /// Selects the last result.
    #[must_use]
    pub const fn last() -> Self {
        Self::new(0, Some(0), true)
    }

    /// Selects the result at `index` in the requested order.
    #[must_use]
    pub const fn nth(index: usize, reverse: bool) -> Self {
        Self::new(index, Some(index), reverse)
    }

    /// Returns the first selected index.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the last selected index, if bounded.
    #[must_use]
    pub const fn stop(&self) -> Option<usize> {
        self.stop
    }

    /// Returns whether indices count from the end.
    #[must_use]
    pub const fn reverse(&self) -> bool {
        self.reverse
    }

    /// Checks that the stop index does not precede the start index.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::InvalidWindow`] when `stop < start`.
    pub const fn validate(&self) -> Result<(), MatcherError> {
        match self.stop {
            Some(stop) if stop < self.start => Err(MatcherError::invalid_window(self.start, stop)),
            _ => Ok(()),
        }
    }

    /// Applies the window to `items`, which are in forward order.
    pub(crate) fn select<T>(&self, mut items: Vec<T>) -> Vec<T> {
        if self.reverse {
            items.reverse();
        }
        let count = self
            .stop
            .map_or(usize::MAX, |stop| stop.saturating_sub(self.start).saturating_add(1));
        items.into_iter().skip(self.start).take(count).collect()
    }
}
