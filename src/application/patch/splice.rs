//! Marker-bounded line splice.

use crate::domain::{BlockSplice, OpReport, PatchError};

/// Replace the line range bounded by the splice markers.
///
/// The range starts at the first line containing the start marker and ends at
/// the first line from there on whose trimmed content equals the end marker.
/// The end marker line is consumed by the splice. Both boundaries must be
/// found before any output text is produced.
pub fn apply(text: &str, splice: &BlockSplice) -> Result<(String, OpReport), PatchError> {
    let lines: Vec<&str> = text.lines().collect();

    let mut start = None;
    let mut end = None;
    for (idx, line) in lines.iter().enumerate() {
        if start.is_none() && line.contains(splice.start_marker) {
            start = Some(idx);
        }
        if start.is_some() && line.trim() == splice.end_marker {
            end = Some(idx);
            break;
        }
    }

    let start = start.ok_or_else(|| PatchError::StartMarkerNotFound {
        marker: splice.start_marker.to_string(),
    })?;
    let end = end.ok_or_else(|| PatchError::EndMarkerNotFound {
        marker: splice.end_marker.to_string(),
    })?;

    let mut updated: Vec<&str> =
        Vec::with_capacity(lines.len() - (end - start + 1) + splice.replacement.len());
    updated.extend_from_slice(&lines[..start]);
    updated.extend_from_slice(splice.replacement);
    updated.extend_from_slice(&lines[end + 1..]);

    let mut joined = updated.join("\n");
    joined.push('\n');

    let changed = joined != text;
    let report = OpReport::Splice {
        label: splice.label.to_string(),
        start_line: start + 1,
        end_line: end + 1,
        replaced_lines: end - start + 1,
        changed,
    };
    Ok((joined, report))
}
