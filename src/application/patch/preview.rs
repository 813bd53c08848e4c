//! Unified diff rendering for dry runs.

use similar::TextDiff;

/// Render the pending change as a unified diff with git-style headers.
pub fn unified_diff(original: &str, updated: &str, target: &str) -> String {
    TextDiff::from_lines(original, updated)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{target}"), &format!("b/{target}"))
        .to_string()
}
