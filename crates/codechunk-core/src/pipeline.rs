//! Pipeline entry point (§6) and the bounded-concurrency async wrapper (§5).

use std::sync::Arc;

use codechunk_domain::ChunkerConfig;
use codechunk_lang::{LanguageRegistry, ParserStatus};
use tokio::sync::Semaphore;

use crate::assembler::assemble_chunks;
use crate::error::Error;
use crate::fallback::chunk_by_lines;
use crate::formatter::{format_file, FormattedChunk};
use crate::metadata::{ChunkRecord, FileMetadata};
use crate::notebook::chunk_notebook;

/// A single error record, returned in place of the two successful fields of
/// the entry-point tri-tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    /// Human-readable diagnostic.
    pub message: String,
}

/// The chunker's external contract: `(full_formatted_text, structured_chunks, error)`.
///
/// Exactly one of `(full_formatted_text, structured_chunks)` together, or
/// `error` alone, is populated — the pipeline never throws across this
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChunkingOutcome {
    /// Whole-file formatted text, chunk blocks joined by the chunk separator.
    pub full_formatted_text: Option<String>,
    /// Per-chunk structured output.
    pub structured_chunks: Option<Vec<FormattedChunk>>,
    /// Populated only when chunking failed outright.
    pub error: Option<ErrorRecord>,
}

impl ChunkingOutcome {
    fn success(full_formatted_text: String, structured_chunks: Vec<FormattedChunk>) -> Self {
        Self { full_formatted_text: Some(full_formatted_text), structured_chunks: Some(structured_chunks), error: None }
    }

    fn failure(error: Error) -> Self {
        Self { full_formatted_text: None, structured_chunks: None, error: Some(ErrorRecord { message: error.to_string() }) }
    }
}

fn tree_sitter_language(name: &str) -> Option<tree_sitter::Language> {
    Some(match name {
        "python" => tree_sitter_python::LANGUAGE.into(),
        "javascript" => tree_sitter_javascript::LANGUAGE.into(),
        "typescript" => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        "tsx" => tree_sitter_typescript::LANGUAGE_TSX.into(),
        "java" => tree_sitter_java::LANGUAGE.into(),
        "rust" => tree_sitter_rust::LANGUAGE.into(),
        "go" => tree_sitter_go::LANGUAGE.into(),
        "ruby" => tree_sitter_ruby::LANGUAGE.into(),
        "c" => tree_sitter_c::LANGUAGE.into(),
        "c++" => tree_sitter_cpp::LANGUAGE.into(),
        "c#" => tree_sitter_c_sharp::LANGUAGE.into(),
        "php" => tree_sitter_php::LANGUAGE_PHP.into(),
        "swift" => tree_sitter_swift::LANGUAGE.into(),
        "kotlin" => tree_sitter_kotlin_ng::LANGUAGE.into(),
        _ => return None,
    })
}

fn fallback_chunks(source: &str, meta: &FileMetadata, language: &str, config: &ChunkerConfig) -> Result<Vec<ChunkRecord>, Error> {
    chunk_by_lines(source, meta, language, config.fallback.chunk_size, config.fallback.overlap)
}

/// Chunk one file's content. Never panics or returns `Err`; failures surface
/// through [`ChunkingOutcome::error`] per the tri-tuple contract.
pub fn chunk_file(
    code_content: &str,
    language_name: Option<&str>,
    file_path: &str,
    repo: Option<&str>,
    branch: Option<&str>,
    config: &ChunkerConfig,
) -> ChunkingOutcome {
    let registry = LanguageRegistry::new();
    let meta = FileMetadata {
        file_path: file_path.to_string(),
        repo: repo.unwrap_or_default().to_string(),
        branch: branch.unwrap_or_default().to_string(),
    };

    if let Some(requested) = language_name {
        if registry.by_name(requested).is_none() {
            return ChunkingOutcome::failure(Error::unsupported_language(requested));
        }
    }

    let profile = language_name
        .and_then(|name| registry.by_name(name))
        .or_else(|| registry.by_path(file_path));

    let Some(profile) = profile else {
        tracing::warn!(file_path, "no language profile resolved, using line-based fallback");
        return match fallback_chunks(code_content, &meta, "unknown", config) {
            Ok(records) => {
                let (full_formatted_text, structured_chunks) = format_file(&records, config.include_tokens);
                ChunkingOutcome::success(full_formatted_text, structured_chunks)
            }
            Err(err) => ChunkingOutcome::failure(err),
        };
    };

    let records = match profile.status {
        ParserStatus::Notebook => chunk_notebook(code_content, &meta, profile.name, config.notebook.max_chars),
        ParserStatus::Plaintext => match fallback_chunks(code_content, &meta, profile.name, config) {
            Ok(records) => records,
            Err(err) => return ChunkingOutcome::failure(err),
        },
        ParserStatus::TreeSitter => match tree_sitter_language(profile.name) {
            Some(language) => match parse_and_assemble(code_content, language, profile, &meta, config) {
                Ok(records) => records,
                Err(err) => return ChunkingOutcome::failure(err),
            },
            None => {
                tracing::error!(language = profile.name, "tree-sitter status without a bundled grammar");
                match fallback_chunks(code_content, &meta, profile.name, config) {
                    Ok(records) => records,
                    Err(err) => return ChunkingOutcome::failure(err),
                }
            }
        },
    };

    let (full_formatted_text, structured_chunks) = format_file(&records, config.include_tokens);
    ChunkingOutcome::success(full_formatted_text, structured_chunks)
}

fn parse_and_assemble(
    code_content: &str,
    language: tree_sitter::Language,
    profile: &codechunk_lang::LanguageProfile,
    meta: &FileMetadata,
    config: &ChunkerConfig,
) -> Result<Vec<ChunkRecord>, Error> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&language)
        .map_err(|err| Error::internal(format!("failed to load {} grammar: {err}", profile.name)))?;

    let tree = parser.parse(code_content, None).ok_or_else(|| Error::internal("parser returned no tree"))?;

    if tree.root_node().has_error() {
        tracing::warn!(file_path = meta.file_path, language = profile.name, "parse tree contains errors, falling back to line-based chunking");
        return fallback_chunks(code_content, meta, profile.name, config);
    }

    Ok(assemble_chunks(tree.root_node(), code_content.as_bytes(), profile, meta, profile.name, config.max_chars, config.coalesce))
}

/// Bounded-concurrency async wrapper over [`chunk_file`]: each file's
/// synchronous pipeline runs on a blocking-pool worker, gated by a semaphore
/// sized from [`ChunkerConfig::max_concurrent_files`].
pub struct AsyncChunker {
    config: Arc<ChunkerConfig>,
    semaphore: Arc<Semaphore>,
}

impl AsyncChunker {
    /// Build a wrapper bounded by `config.max_concurrent_files` in-flight files.
    pub fn new(config: ChunkerConfig) -> Self {
        let permits = config.max_concurrent_files.max(1);
        Self { config: Arc::new(config), semaphore: Arc::new(Semaphore::new(permits)) }
    }

    /// Chunk one file on the blocking pool, waiting for a free slot first.
    pub async fn chunk_file(
        &self,
        code_content: String,
        language_name: Option<String>,
        file_path: String,
        repo: Option<String>,
        branch: Option<String>,
    ) -> ChunkingOutcome {
        let _permit = self.semaphore.acquire().await.expect("semaphore is never closed");
        let config = Arc::clone(&self.config);

        let result = tokio::task::spawn_blocking(move || {
            chunk_file(&code_content, language_name.as_deref(), &file_path, repo.as_deref(), branch.as_deref(), &config)
        })
        .await;

        match result {
            Ok(outcome) => outcome,
            Err(join_err) => {
                tracing::error!(error = %join_err, "chunking task panicked");
                ChunkingOutcome::failure(Error::internal(format!("chunking task panicked: {join_err}")))
            }
        }
    }
}
