//! Language Profile Registry
//!
//! Per-language node-type tables and path-based detection used by the
//! chunking pipeline to recognize imports, containers, and identifiers
//! in a parse tree.
//!
//! ## Features
//!
//! - **Language Detection**: Identify a file's language from its path
//! - **Language Profiles**: Tree-sitter node-type tables per language
//!
//! ## Supported Languages
//!
//! Tree-sitter grammars are bundled for Rust, Python, JavaScript,
//! TypeScript, Go, Java, C, C++, C#, Ruby, PHP, Swift, and Kotlin. Every
//! other language this crate recognizes a profile for falls back to
//! line-based chunking.
//!
//! ## Example
//!
//! ```
//! use codechunk_lang::{LanguageDetector, ParserStatus};
//! use std::path::Path;
//!
//! let detector = LanguageDetector::new();
//! let profile = detector.detect(Path::new("main.rs")).unwrap();
//! assert_eq!(profile.name, "rust");
//! assert_eq!(profile.status, ParserStatus::TreeSitter);
//! ```

pub mod detection;
pub mod error;
pub mod language;

pub use detection::LanguageDetector;
pub use error::{LanguageError, Result};
pub use language::{BlockDelimiters, LanguageProfile, LanguageRegistry, ParserStatus};
