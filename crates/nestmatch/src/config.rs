//! Matcher configuration and derived-configuration overrides.

use nestmatch_core::PatternFlags;
use serde::{Deserialize, Serialize};

use crate::error::MatcherError;
use crate::pairing::Inclusion;

/// Immutable settings describing one delimiter matcher.
///
/// Equality and hashing cover every field, so two configurations that
/// compare equal always hash equally.
///
/// # Defaults
///
/// - no prepend/append constraints
/// - no capture group name
/// - [`PatternFlags::default`]
/// - `global`: `false` (top-level spans only)
/// - no inverse pattern
///
/// # Example
///
/// ```
/// use nestmatch::MatcherConfig;
///
/// let config = MatcherConfig::new("<", ">").with_capture_name("body");
/// assert_eq!(config.start_marker(), "<");
/// assert_eq!(config.capture_name(), Some("body"));
/// assert!(!config.global());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Pattern for the opening delimiter.
    start_marker: String,
    /// Pattern for the closing delimiter.
    end_marker: String,
    /// Pattern that must end exactly where an opening begins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    prepended: Option<String>,
    /// Pattern that must begin exactly where a closing ends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    appended: Option<String>,
    /// Name of the group bound to the text between the markers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    capture_name: Option<String>,
    /// Mode flags applied to every compiled pattern.
    #[serde(default)]
    flags: PatternFlags,
    /// Whether spans at every depth are reported.
    #[serde(default)]
    global: bool,
    /// Pattern matched only outside every span.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inverse_match: Option<String>,
}

impl MatcherConfig {
    /// Creates a configuration with the given markers and default settings.
    #[must_use]
    pub fn new(start_marker: impl Into<String>, end_marker: impl Into<String>) -> Self {
        Self {
            start_marker: start_marker.into(),
            end_marker: end_marker.into(),
            prepended: None,
            appended: None,
            capture_name: None,
            flags: PatternFlags::default(),
            global: false,
            inverse_match: None,
        }
    }

    /// Returns the start marker pattern.
    #[must_use]
    pub fn start_marker(&self) -> &str {
        &self.start_marker
    }

    /// Returns the end marker pattern.
    #[must_use]
    pub fn end_marker(&self) -> &str {
        &self.end_marker
    }

    /// Returns the prepend constraint, if any.
    #[must_use]
    pub fn prepended(&self) -> Option<&str> {
        self.prepended.as_deref()
    }

    /// Returns the append constraint, if any.
    #[must_use]
    pub fn appended(&self) -> Option<&str> {
        self.appended.as_deref()
    }

    /// Returns the capture group name, if any.
    #[must_use]
    pub fn capture_name(&self) -> Option<&str> {
        self.capture_name.as_deref()
    }

    /// Returns the pattern mode flags.
    #[must_use]
    pub const fn flags(&self) -> PatternFlags {
        self.flags
    }

    /// Returns whether spans at every depth are reported.
    #[must_use]
    pub const fn global(&self) -> bool {
        self.global
    }

    /// Returns the inverse-match pattern, if any.
    #[must_use]
    pub fn inverse_match(&self) -> Option<&str> {
        self.inverse_match.as_deref()
    }

    /// Returns the depth policy implied by [`MatcherConfig::global`].
    #[must_use]
    pub const fn inclusion(&self) -> Inclusion {
        if self.global {
            Inclusion::AllDepths
        } else {
            Inclusion::TopLevel
        }
    }

    /// Returns a copy with a prepend constraint.
    #[must_use]
    pub fn with_prepended(mut self, pattern: impl Into<String>) -> Self {
        self.prepended = Some(pattern.into());
        self
    }

    /// Returns a copy with an append constraint.
    #[must_use]
    pub fn with_appended(mut self, pattern: impl Into<String>) -> Self {
        self.appended = Some(pattern.into());
        self
    }

    /// Returns a copy with a capture group name.
    #[must_use]
    pub fn with_capture_name(mut self, name: impl Into<String>) -> Self {
        self.capture_name = Some(name.into());
        self
    }

    /// Returns a copy with the given mode flags.
    #[must_use]
    pub const fn with_flags(mut self, flags: PatternFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Returns a copy with the depth policy set.
    #[must_use]
    pub const fn with_global(mut self, global: bool) -> Self {
        self.global = global;
        self
    }

    /// Returns a copy with an inverse-match pattern.
    #[must_use]
    pub fn with_inverse_match(mut self, pattern: impl Into<String>) -> Self {
        self.inverse_match = Some(pattern.into());
        self
    }

    /// Returns a copy with `overrides` applied.
    ///
    /// Fields the overrides leave unset keep their current value, unless
    /// the overrides were created with [`ConfigOverrides::clearing_optionals`],
    /// in which case unset optional fields are cleared.
    #[must_use]
    pub fn apply(&self, overrides: ConfigOverrides) -> Self {
        let clear = overrides.clear_optionals;
        let keep = |current: &Option<String>| {
            if clear {
                None
            } else {
                current.clone()
            }
        };
        Self {
            start_marker: overrides
                .start_marker
                .unwrap_or_else(|| self.start_marker.clone()),
            end_marker: overrides
                .end_marker
                .unwrap_or_else(|| self.end_marker.clone()),
            prepended: overrides.prepended.or_else(|| keep(&self.prepended)),
            appended: overrides.appended.or_else(|| keep(&self.appended)),
            capture_name: overrides.capture_name.or_else(|| keep(&self.capture_name)),
            flags: overrides.flags.unwrap_or(self.flags),
            global: overrides.global.unwrap_or(self.global),
            inverse_match: overrides
                .inverse_match
                .or_else(|| keep(&self.inverse_match)),
        }
    }

    /// Checks the construction-time rules.
    ///
    /// # Errors
    ///
    /// Returns a [`MatcherError`] describing the first violated rule.
    pub fn validate(&self) -> Result<(), MatcherError> {
        require_non_empty("start marker", &self.start_marker)?;
        require_non_empty("end marker", &self.end_marker)?;
        if self.start_marker == self.end_marker {
            return Err(MatcherError::identical_markers(self.start_marker.clone()));
        }
        for (field, pattern) in [
            ("prepended", &self.prepended),
            ("appended", &self.appended),
            ("inverse match", &self.inverse_match),
        ] {
            if let Some(value) = pattern {
                require_non_empty(field, value)?;
            }
        }
        if let Some(name) = &self.capture_name {
            validate_capture_name(name)?;
        }
        Ok(())
    }
}

fn require_non_empty(field: &'static str, pattern: &str) -> Result<(), MatcherError> {
    if pattern.is_empty() {
        Err(MatcherError::empty_pattern(field))
    } else {
        Ok(())
    }
}

fn validate_capture_name(name: &str) -> Result<(), MatcherError> {
    if name.chars().count() < 2 {
        return Err(MatcherError::capture_name_too_short(name));
    }
    let mut chars = name.chars();
    let leads_well = chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_');
    if leads_well && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err(MatcherError::invalid_capture_name(name))
    }
}

/// Selective replacements used to derive a new configuration.
///
/// # Example
///
/// ```
/// use nestmatch::{ConfigOverrides, MatcherConfig};
///
/// let base = MatcherConfig::new("<", ">").with_capture_name("body");
/// let derived = base.apply(ConfigOverrides::new().with_global(true));
/// assert!(derived.global());
/// assert_eq!(derived.capture_name(), Some("body"));
///
/// let cleared = base.apply(ConfigOverrides::clearing_optionals());
/// assert_eq!(cleared.capture_name(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    start_marker: Option<String>,
    end_marker: Option<String>,
    prepended: Option<String>,
    appended: Option<String>,
    capture_name: Option<String>,
    flags: Option<PatternFlags>,
    global: Option<bool>,
    inverse_match: Option<String>,
    clear_optionals: bool,
}

impl ConfigOverrides {
    /// Creates overrides that keep every unset field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates overrides that clear every unset optional field.
    #[must_use]
    pub fn clearing_optionals() -> Self {
        Self {
            clear_optionals: true,
            ..Self::default()
        }
    }

    /// Replaces the start marker.
    #[must_use]
    pub fn with_start_marker(mut self, pattern: impl Into<String>) -> Self {
        self.start_marker = Some(pattern.into());
        self
    }

    /// Replaces the end marker.
    #[must_use]
    pub fn with_end_marker(mut self, pattern: impl Into<String>) -> Self {
        self.end_marker = Some(pattern.into());
        self
    }

    /// Replaces the prepend constraint.
    #[must_use]
    pub fn with_prepended(mut self, pattern: impl Into<String>) -> Self {
        self.prepended = Some(pattern.into());
        self
    }

    /// Replaces the append constraint.
    #[must_use]
    pub fn with_appended(mut self, pattern: impl Into<String>) -> Self {
        self.appended = Some(pattern.into());
        self
    }

    /// Replaces the capture group name.
    #[must_use]
    pub fn with_capture_name(mut self, name: impl Into<String>) -> Self {
        self.capture_name = Some(name.into());
        self
    }

    /// Replaces the mode flags.
    #[must_use]
    pub const fn with_flags(mut self, flags: PatternFlags) -> Self {
        self.flags = Some(flags);
        self
    }

    /// Replaces the depth policy.
    #[must_use]
    pub const fn with_global(mut self, global: bool) -> Self {
        self.global = Some(global);
        self
    }

    /// Replaces the inverse-match pattern.
    #[must_use]
    pub fn with_inverse_match(mut self, pattern: impl Into<String>) -> Self {
        self.inverse_match = Some(pattern.into());
        self
    }
}
