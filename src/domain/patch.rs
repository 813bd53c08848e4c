//! Patch descriptions and outcome records.
//!
//! A patch is a static description of edits against one source file. The
//! outcome types record what actually happened when it ran.

use serde::Serialize;
use std::path::PathBuf;

/// Exact literal substring replacement.
///
/// A substitution whose needle equals its replacement is valid: it marks a
/// block as reviewed without changing it.
#[derive(Debug, Clone, Copy)]
pub struct Substitution {
    /// Stable name used in logs and reports.
    pub label: &'static str,
    /// Literal text to search for. Every occurrence is replaced.
    pub needle: &'static str,
    /// Literal text to substitute in.
    pub replacement: &'static str,
}

/// Replacement of a contiguous line range bounded by two marker lines.
#[derive(Debug, Clone, Copy)]
pub struct BlockSplice {
    /// Stable name used in logs and reports.
    pub label: &'static str,
    /// Substring that identifies the first line of the range.
    pub start_marker: &'static str,
    /// Trimmed content that identifies the last line of the range. The line
    /// itself is dropped by the splice.
    pub end_marker: &'static str,
    /// Lines spliced in between the surrounding text.
    pub replacement: &'static [&'static str],
}

/// A single edit operation inside a [`FilePatch`].
#[derive(Debug, Clone, Copy)]
pub enum PatchOp {
    Substitute(Substitution),
    SpliceBlock(BlockSplice),
}

/// One curated patch against one source file.
#[derive(Debug, Clone, Copy)]
pub struct FilePatch {
    /// Catalog id, also the CLI subcommand name.
    pub id: &'static str,
    /// Target path relative to the app checkout root.
    pub target: &'static str,
    /// One-line description for humans.
    pub summary: &'static str,
    /// Edits applied in order over the same in-memory text.
    pub ops: &'static [PatchOp],
}

/// Outcome of a single operation.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OpReport {
    Substitute {
        label: String,
        /// Number of needle occurrences that were replaced.
        occurrences: usize,
        changed: bool,
    },
    Splice {
        label: String,
        /// 1-based line numbers of the replaced range in the input text.
        start_line: usize,
        end_line: usize,
        replaced_lines: usize,
        changed: bool,
    },
}

impl OpReport {
    pub fn changed(&self) -> bool {
        match self {
            OpReport::Substitute { changed, .. } | OpReport::Splice { changed, .. } => *changed,
        }
    }
}

/// Outcome of running one file patch.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub patch_id: String,
    /// Resolved path of the patched file.
    pub file: PathBuf,
    /// Whether the written text differs from what was read.
    pub changed: bool,
    pub operations: Vec<OpReport>,
    /// Unified diff of the pending change. Only rendered for dry runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}
