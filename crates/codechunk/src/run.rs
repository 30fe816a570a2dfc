//! Drives the chunking pipeline over a file or directory and renders output.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use codechunk_core::{AsyncChunker, ChunkingOutcome};
use walkdir::WalkDir;

use crate::cli::OutputFormat;
use crate::config::Config;

/// Chunk `path` (a single file, or a directory walked recursively) and print
/// each file's result to stdout per `format`.
pub async fn run(path: &Path, repo: &str, branch: Option<&str>, format: OutputFormat, config: Config) -> Result<()> {
    let chunker = AsyncChunker::new(config.chunker);
    let files = collect_files(path)?;

    for file in files {
        let content = fs::read_to_string(&file).with_context(|| format!("reading {}", file.display()))?;
        let file_path = file.display().to_string();
        let outcome = chunker
            .chunk_file(content, None, file_path.clone(), Some(repo.to_owned()), branch.map(str::to_owned))
            .await;
        render_outcome(&file_path, &outcome, format)?;
    }

    Ok(())
}

fn collect_files(path: &Path) -> Result<Vec<std::path::PathBuf>> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    Ok(WalkDir::new(path)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .collect())
}

#[allow(clippy::print_stdout)]
fn render_outcome(file_path: &str, outcome: &ChunkingOutcome, format: OutputFormat) -> Result<()> {
    if let Some(error) = &outcome.error {
        tracing::error!(file_path, error = %error.message, "chunking failed");
        return Ok(());
    }

    match format {
        OutputFormat::Text => {
            if let Some(text) = &outcome.full_formatted_text {
                println!("{text}");
            }
        }
        OutputFormat::Json => {
            if let Some(chunks) = &outcome.structured_chunks {
                println!("{}", serde_json::to_string_pretty(chunks)?);
            }
        }
    }

    Ok(())
}
