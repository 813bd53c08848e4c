//! flowpatch applies curated source patches to a MyPlantScan app checkout.
//!
//! The library holds the patch catalog and the engine that runs it; the
//! binary in `src/main.rs` is a thin clap front-end over both.

pub mod application;
pub mod domain;
pub mod infra;
pub mod patches;
