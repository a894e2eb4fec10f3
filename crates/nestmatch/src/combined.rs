//! Builds the combined `prefix start content end suffix` pattern source.

use crate::config::MatcherConfig;

/// Content wildcard used when `.` does not cross line breaks.
const CONTENT_ANY: &str = r"[\s\S]*";
/// Content wildcard relying on dot-all semantics.
const CONTENT_DOT_ALL: &str = ".*";

/// Returns the source of the pattern re-applied to every accepted span.
///
/// Every user pattern is wrapped in a non-capturing group so alternations
/// stay local.  The content wildcard is greedy: each search stops at the
/// span's closing marker, so the greedy wildcard reaches exactly that marker.
pub(crate) fn combined_source(config: &MatcherConfig) -> String {
    let content = if config.flags().dot_all() {
        CONTENT_DOT_ALL
    } else {
        CONTENT_ANY
    };
    let body = config.capture_name().map_or_else(
        || format!("(?:{content})"),
        |name| format!("(?P<{name}>{content})"),
    );
    let prefix = config.prepended().map(group).unwrap_or_default();
    let suffix = config.appended().map(group).unwrap_or_default();
    format!(
        "{prefix}{start}{body}{end}{suffix}",
        start = group(config.start_marker()),
        end = group(config.end_marker()),
    )
}

fn group(pattern: &str) -> String {
    format!("(?:{pattern})")
}
