//! High-level operations wiring CLI commands to the core and graph crates.

pub mod ops_inspect;
pub mod ops_manifest;
pub mod ops_tree;
