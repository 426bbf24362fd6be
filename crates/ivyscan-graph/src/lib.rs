//! Graph algorithms over a resolve report: dev/runtime classification,
//! the parent -> children registry, deduplicating depth-first flattening,
//! and `RegisterUsage` emission.

pub mod analysis;
pub mod classify;
pub mod emit;
pub mod flatten;
pub mod registry;
pub mod tree;

#[cfg(test)]
mod test_support;
