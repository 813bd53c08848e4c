//! Domain types for the patcher.
//! Defines the patch descriptions, outcome records, and error types.

pub mod error;
pub mod patch;

pub use error::*;
pub use patch::*;
