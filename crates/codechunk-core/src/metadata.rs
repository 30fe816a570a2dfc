//! Chunk metadata and the output record shape.

use serde::{Deserialize, Serialize};

use crate::span::LineSpan;

/// Input file identity, carried into every chunk's metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    /// Path as supplied by the caller (not yet normalized).
    pub file_path: String,
    /// Repository name; used to normalize `file_path`.
    pub repo: String,
    /// Branch name; carried but never embedded in `chunk_id` (see DESIGN.md).
    pub branch: String,
}

/// How a chunk's boundaries were determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChunkingMethod {
    /// Produced by the tree-sitter span builder.
    TreeSitter,
    /// Produced by the windowed line-based fallback.
    LineBased,
    /// Produced by the notebook cell specialization.
    Notebook,
}

/// Per-chunk metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Repository name.
    pub repo: String,
    /// Branch name.
    pub branch: String,
    /// Normalized file path (`"<repo>/..."`).
    pub file_path: String,
    /// Detected or declared language name.
    pub language: String,
    /// Stable id: `"<file_path>-L<start>-L<end>"` or `"<file>-cell<i>-<sub>"`.
    pub chunk_id: String,
    /// Zero-based emission order.
    pub chunk_index: usize,
    /// 1-based inclusive start line.
    pub start_line: usize,
    /// 1-based inclusive end line.
    pub end_line: usize,
    /// How this chunk was produced.
    pub chunking_method: ChunkingMethod,
    /// Human-readable structural position, e.g. `"Chunk within class_definition 'A'"`.
    pub relational_description: String,
    /// Notebook cell kind, if this chunk came from a notebook.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_type: Option<String>,
    /// Index of the originating notebook cell, if applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_cell_index: Option<usize>,
}

/// A fully assembled chunk, before formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkRecord {
    /// Exact decoded byte slice of the chunk's span, after whitespace handoff.
    pub content: String,
    /// Chunk metadata.
    pub metadata: ChunkMetadata,
    /// Ordered, de-duplicated import statement texts relevant to this chunk.
    pub import_lines: Vec<String>,
    /// 1-based line spans of each enclosing container's signature, outermost first.
    pub parent_context_spans: Vec<LineSpan>,
    /// Literal source lines for each of `parent_context_spans`.
    pub parent_context_text: Vec<String>,
}

impl ChunkRecord {
    /// Number of non-whitespace bytes in `content`.
    pub fn non_whitespace_len(&self) -> usize {
        self.content.bytes().filter(|b| !b.is_ascii_whitespace()).count()
    }

    /// `chunk_id = "<normalized_file_path>-L<start_line>-L<end_line>"`.
    pub fn build_chunk_id(normalized_file_path: &str, line_span: LineSpan) -> String {
        format!("{normalized_file_path}-L{}-L{}", line_span.start_line, line_span.end_line)
    }
}
