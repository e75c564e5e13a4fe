//! Time formatting helpers.

use std::time::Duration;

/// Format a countdown as `{d}d {h}h {m}m {s}s`, truncating sub-second parts.
pub fn format_countdown(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    format!(
        "{}d {}h {}m {}s",
        secs / 86_400,
        (secs % 86_400) / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}
