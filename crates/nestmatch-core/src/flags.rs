//! Matching mode flags shared by every compiled pattern.

use serde::{Deserialize, Serialize};

/// Mode flags applied when compiling a pattern.
///
/// # Defaults
///
/// - `case_sensitive`: `true`
/// - `multi_line`: `false`
/// - `unicode`: `false`
/// - `dot_all`: `false`
///
/// # Example
///
/// ```
/// use nestmatch_core::PatternFlags;
///
/// let flags = PatternFlags::default().with_case_sensitive(false);
/// assert!(!flags.case_sensitive());
/// assert!(!flags.dot_all());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternFlags {
    /// Whether letters must match with the same case.
    case_sensitive: bool,
    /// Whether `^` and `$` match at line boundaries.
    multi_line: bool,
    /// Whether character classes and case folding are Unicode-aware.
    unicode: bool,
    /// Whether `.` also matches line terminators.
    dot_all: bool,
}

impl PatternFlags {
    /// Creates a flag set with explicit values.
    #[must_use]
    pub const fn new(case_sensitive: bool, multi_line: bool, unicode: bool, dot_all: bool) -> Self {
        Self {
            case_sensitive,
            multi_line,
            unicode,
            dot_all,
        }
    }

    /// Returns whether matching is case-sensitive.
    #[must_use]
    pub const fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Returns whether multi-line anchors are enabled.
    #[must_use]
    pub const fn multi_line(&self) -> bool {
        self.multi_line
    }

    /// Returns whether Unicode mode is enabled.
    #[must_use]
    pub const fn unicode(&self) -> bool {
        self.unicode
    }

    /// Returns whether `.` matches line terminators.
    #[must_use]
    pub const fn dot_all(&self) -> bool {
        self.dot_all
    }

    /// Returns a copy with case sensitivity set.
    #[must_use]
    pub const fn with_case_sensitive(mut self, enabled: bool) -> Self {
        self.case_sensitive = enabled;
        self
    }

    /// Returns a copy with multi-line mode set.
    #[must_use]
    pub const fn with_multi_line(mut self, enabled: bool) -> Self {
        self.multi_line = enabled;
        self
    }

    /// Returns a copy with Unicode mode set.
    #[must_use]
    pub const fn with_unicode(mut self, enabled: bool) -> Self {
        self.unicode = enabled;
        self
    }

    /// Returns a copy with dot-all mode set.
    #[must_use]
    pub const fn with_dot_all(mut self, enabled: bool) -> Self {
        self.dot_all = enabled;
        self
    }
}

impl Default for PatternFlags {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            multi_line: false,
            unicode: false,
            dot_all: false,
        }
    }
}
