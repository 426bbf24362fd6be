//! Shared utilities for ivyscan.
//!
//! This crate provides cross-cutting concerns used by all other ivyscan crates:
//! the unified error type, filesystem helpers (including atomic file output),
//! and terminal status lines.

pub mod errors;
pub mod fs;
pub mod progress;
