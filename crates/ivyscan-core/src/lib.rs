//! Core data types for ivyscan.
//!
//! This crate defines the types shared by the graph algorithms and the
//! operations: normalized module coordinates, the resolver's report,
//! project configuration, and the `RegisterUsage` document.
//!
//! This crate performs no graph traversal of its own.

pub mod config;
pub mod coordinate;
pub mod report;
pub mod usage;
