//! Language Detection
//!
//! Detects a file's language from its path, using known filenames
//! (`Dockerfile`, `Makefile`, ...) and file extensions. Detection is
//! path-based only; this crate does not sniff file content or shebangs.

use std::path::Path;

use crate::error::{LanguageError, Result};
use crate::language::{LanguageProfile, LanguageRegistry};

/// Detects a file's language profile from its path.
pub struct LanguageDetector {
    registry: LanguageRegistry,
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector {
    /// Create a new detector backed by the full language registry.
    pub fn new() -> Self {
        Self {
            registry: LanguageRegistry::new(),
        }
    }

    /// Detect the language profile for a file path.
    pub fn detect(&self, path: &Path) -> Result<&LanguageProfile> {
        self.registry
            .by_path(&path.to_string_lossy())
            .ok_or_else(|| LanguageError::DetectionFailed {
                path: path.display().to_string(),
            })
    }

    /// Try to detect a language profile, returning `None` instead of an error.
    pub fn detect_opt(&self, path: &Path) -> Option<&LanguageProfile> {
        self.detect(path).ok()
    }

    /// Detect the language and return just its name.
    pub fn detect_name(&self, path: &Path) -> Option<String> {
        self.detect_opt(path).map(|profile| profile.name.to_string())
    }

    /// Check whether a file's detected language is in `allowed_languages`.
    pub fn matches_languages(&self, path: &Path, allowed_languages: &[String]) -> bool {
        self.detect_name(path)
            .is_some_and(|language| allowed_languages.contains(&language))
    }

    /// All registered language names.
    pub fn supported_language_names(&self) -> Vec<&'static str> {
        self.registry.all_names()
    }

    /// The underlying registry, for direct profile lookups.
    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }
}
