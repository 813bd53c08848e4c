//! Infrastructure layer (adapters/implementations).
//!
//! This module contains the IO-heavy pieces (filesystem access).

pub mod fs;
