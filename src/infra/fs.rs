//! Source file IO.
//!
//! Each target is read fully into memory, transformed, and overwritten once.
//! No backup is created.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a target source file into memory.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read source file: {}", path.display()))
}

/// Overwrite a target source file with the transformed text.
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("write source file: {}", path.display()))
}
