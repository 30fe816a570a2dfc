//! Configuration Value Objects
//!
//! Value objects describing how source files are chunked. These are plain
//! data; loading them from TOML/env vars is the job of the `codechunk`
//! binary's config layer, not this crate.

use serde::{Deserialize, Serialize};

/// Top-level chunking configuration.
///
/// Mirrors the external interface's tunables: how large a chunk is allowed
/// to grow before it is split, how aggressively small trailing chunks are
/// coalesced into their neighbor, and how many files may be chunked
/// concurrently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChunkerConfig {
    /// Maximum number of characters a single chunk's content may contain
    /// before the recursive splitter descends into child nodes.
    pub max_chars: usize,
    /// Below this many non-whitespace characters, a trailing chunk is a
    /// coalescing candidate for merging into its predecessor.
    pub coalesce: usize,
    /// Whether to attach a token count to each chunk's metadata.
    pub include_tokens: bool,
    /// Whether to invoke the (optional) description-generation hook for
    /// each chunk's `relational_description`.
    pub generate_descriptions: bool,
    /// Maximum number of files chunked concurrently by the async wrapper.
    pub max_concurrent_files: usize,
    /// Parameters for the line-based fallback chunker.
    pub fallback: FallbackConfig,
    /// Parameters specific to Jupyter notebook cell splitting.
    pub notebook: NotebookConfig,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            max_chars: 1500,
            coalesce: 100,
            include_tokens: false,
            generate_descriptions: false,
            max_concurrent_files: 5,
            fallback: FallbackConfig::default(),
            notebook: NotebookConfig::default(),
        }
    }
}

/// Configuration for [`chunk_by_lines`](../../codechunk_core/fallback/fn.chunk_by_lines.html),
/// the plaintext/unsupported-language fallback path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FallbackConfig {
    /// Number of lines per chunk.
    pub chunk_size: usize,
    /// Number of lines shared between consecutive chunks.
    pub overlap: usize,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            chunk_size: 40,
            overlap: 15,
        }
    }
}

/// Configuration for splitting `.ipynb` notebook cells.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NotebookConfig {
    /// Maximum characters per cell sub-chunk. Distinct from
    /// [`ChunkerConfig::max_chars`]; notebooks use their own default.
    pub max_chars: usize,
}

impl Default for NotebookConfig {
    fn default() -> Self {
        Self { max_chars: 2000 }
    }
}
