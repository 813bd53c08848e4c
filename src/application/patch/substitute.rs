//! Exact literal substring replacement.

use crate::domain::{OpReport, Substitution};

/// Apply a substitution to the full text, replacing every occurrence.
///
/// An absent needle is not an error: the text passes through untouched and
/// the outcome records it, so the caller can tell "already patched" apart
/// from "target text missing".
pub fn apply(text: &str, sub: &Substitution) -> (String, OpReport) {
    let occurrences = text.matches(sub.needle).count();

    if occurrences == 0 {
        log::warn!(
            "substitution '{}' matched nothing; text left as-is",
            sub.label
        );
        let report = OpReport::Substitute {
            label: sub.label.to_string(),
            occurrences: 0,
            changed: false,
        };
        return (text.to_string(), report);
    }

    let updated = text.replace(sub.needle, sub.replacement);
    let changed = updated != text;
    let report = OpReport::Substitute {
        label: sub.label.to_string(),
        occurrences,
        changed,
    };
    (updated, report)
}
