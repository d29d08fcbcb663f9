pub mod error;
pub mod json;
pub mod printer;
pub mod span;
pub mod tree;

// Re-export commonly used items for convenience
pub use printer::TreePrinter;
pub use span::{FileId, Span};
pub use tree::{BTree, Tree, TreeKind};

// Alias for error types
pub type Error = crate::error::Error;
pub type Result<T> = crate::error::Result<T>;
