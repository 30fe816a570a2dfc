//! Cross-crate utility modules shared by the chunker crates.

/// Canonical path utilities — strict, no fallbacks, plus file-path normalization.
pub mod path;
