//! Application layer (use-cases, policies).
//!
//! This module orchestrates the patch logic over domain descriptions without
//! depending on the CLI surface.

pub mod patch;
