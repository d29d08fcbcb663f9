// Passes - focused tree rewrites over arbor-core trees

pub mod renormalize;

pub use renormalize::*;
