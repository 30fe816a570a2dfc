//! Tree-sitter AST traversal utilities
//!
//! Grammar-agnostic helpers for walking and querying tree-sitter parse
//! trees: depth-first visitor traversal and cursor navigation, independent
//! of any particular chunking pipeline.
//!
//! ## Features
//!
//! - **Tree Walking**: Depth-first traversal with visitor pattern
//! - **Cursor Utilities**: Navigation helpers for tree-sitter cursors
//!
//! ## Example
//!
//! ```no_run
//! use codechunk_ast::TreeWalker;
//! use tree_sitter::Parser;
//!
//! fn example() {
//!     let mut parser = Parser::new();
//!     parser.set_language(&tree_sitter_rust::LANGUAGE.into()).unwrap();
//!
//!     let code = "fn main() { println!(\"Hello\"); }";
//!     let tree = parser.parse(code, None).unwrap();
//!
//!     let functions = TreeWalker::find_by_kind(tree.root_node(), "function_item");
//!     println!("Found {} functions", functions.len());
//! }
//! ```

pub mod cursor;
pub mod error;
pub mod visitor;
pub mod walker;

// Re-export main types
pub use cursor::CursorUtils;
pub use error::{AstError, Result};
pub use visitor::{KindCollector, KindCounter, NodeMatch, NodeVisitor};
pub use walker::TreeWalker;
