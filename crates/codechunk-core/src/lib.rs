//! Language-aware code chunking pipeline.
//!
//! Splits a source file into syntax-aware chunks sized for embedding and
//! retrieval: each chunk carries the imports it actually uses, the
//! signatures of the scopes that enclose it, and enough metadata to locate
//! it back in the original file. Unparseable or unsupported input degrades
//! to a windowed line-based chunker rather than failing outright.
//!
//! ```no_run
//! use codechunk_core::{chunk_file, ChunkerConfig};
//!
//! let config = ChunkerConfig::default();
//! let outcome = chunk_file("def f():\n    return 1\n", None, "f.py", Some("org/repo"), None, &config);
//! assert!(outcome.error.is_none());
//! ```

pub mod ancestor;
pub mod assembler;
pub mod byte_span;
pub mod coalesce;
pub mod error;
pub mod fallback;
pub mod formatter;
pub mod identifier;
pub mod imports;
pub mod metadata;
pub mod notebook;
pub mod pipeline;
pub mod span;

pub use codechunk_domain::{ChunkerConfig, FallbackConfig, NotebookConfig};
pub use error::{Error, Result};
pub use formatter::{format_chunk, format_file, FormattedChunk};
pub use metadata::{ChunkMetadata, ChunkRecord, ChunkingMethod, FileMetadata};
pub use pipeline::{chunk_file, AsyncChunker, ChunkingOutcome, ErrorRecord};
pub use span::{LineSpan, Span};
