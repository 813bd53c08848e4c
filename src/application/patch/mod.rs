//! Patch execution over an on-disk app checkout.
//!
//! The runner reads the target once, threads the text through each operation
//! in order, and writes back once at the end. A fatal operation error
//! propagates before the write, leaving the file untouched.

pub mod preview;
pub mod splice;
pub mod substitute;


use crate::domain::{FilePatch, FileReport, PatchOp};
use crate::infra::fs;
use anyhow::{Context, Result};
use std::path::Path;

/// Run one patch against the checkout rooted at `root`.
///
/// With `dry_run` set, nothing is written and the report carries a unified
/// diff of the pending change. Without it the target is overwritten even when
/// the text came out unchanged, matching the original maintenance scripts.
pub fn run_patch(root: &Path, patch: &FilePatch, dry_run: bool) -> Result<FileReport> {
    let path = root.join(patch.target);
    let original = fs::read_text(&path)?;

    let mut text = original.clone();
    let mut operations = Vec::with_capacity(patch.ops.len());
    for op in patch.ops {
        let (updated, report) = match op {
            PatchOp::Substitute(sub) => substitute::apply(&text, sub),
            PatchOp::SpliceBlock(block) => splice::apply(&text, block)
                .with_context(|| format!("apply patch '{}' to {}", patch.id, path.display()))?,
        };
        text = updated;
        operations.push(report);
    }

    let changed = text != original;
    let diff = (dry_run && changed).then(|| preview::unified_diff(&original, &text, patch.target));

    if dry_run {
        log::info!("dry run: skipped writing {}", path.display());
    } else {
        fs::write_text(&path, &text)?;
        log::info!(
            "wrote {} ({})",
            path.display(),
            if changed { "changed" } else { "unchanged" }
        );
    }

    Ok(FileReport {
        patch_id: patch.id.to_string(),
        file: path,
        changed,
        operations,
        diff,
    })
}
