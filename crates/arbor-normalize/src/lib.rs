// arbor-normalize: canonicalization passes over arbor-core trees
//
// Architecture:
// - passes: focused rewrites that each take a tree and return a new tree
// - reselect: the hook editors use to follow nodes across a rewrite
// - error: helpers for constructing arbor-core errors in tooling and tests

pub mod error;
pub mod passes;
pub mod reselect;

// Re-export key types for convenience
pub use passes::*;
pub use reselect::*;
