//! Type signature resolution and Java source parsing using tree-sitter

pub mod java_parser;
pub mod type_signature;

// Re-export commonly used items
pub use java_parser::JavaParser;
pub use type_signature::{resolve, split_top_level};
