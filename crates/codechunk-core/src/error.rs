//! Chunker error types.
//!
//! Grouped the way `codechunk_domain::Error` is: related variants share a
//! constructor `impl` block instead of one flat method list.

use thiserror::Error;

/// Chunking pipeline error.
#[derive(Error, Debug)]
pub enum Error {
    /// The caller asked for an unrecognized language name.
    #[error("unsupported language: {language}")]
    UnsupportedLanguage {
        /// The unrecognized language name.
        language: String,
    },

    /// Fallback parameters violate `0 <= overlap < chunk_size`.
    #[error("invalid fallback parameters: chunk_size={chunk_size}, overlap={overlap}")]
    InvalidFallbackParameters {
        /// Requested window size in lines.
        chunk_size: usize,
        /// Requested overlap in lines.
        overlap: usize,
    },

    /// An internal invariant was violated while assembling chunks.
    #[error("internal chunking error: {message}")]
    Internal {
        /// Diagnostic message.
        message: String,
    },

    /// Source bytes could not be decoded even with lossy replacement (unreachable
    /// in practice, kept for API completeness of the UTF-8 boundary).
    #[error("failed to decode source as UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Result type alias for chunking operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// An unsupported/unrecognized language name was requested.
    pub fn unsupported_language(language: impl Into<String>) -> Self {
        Self::UnsupportedLanguage { language: language.into() }
    }

    /// Fallback chunking parameters are out of range.
    pub fn invalid_fallback_parameters(chunk_size: usize, overlap: usize) -> Self {
        Self::InvalidFallbackParameters { chunk_size, overlap }
    }
}

impl Error {
    /// Wrap an internal-assembly diagnostic message.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into() }
    }
}
