//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Chunk a file or directory into retrieval-sized, context-enriched pieces.
#[derive(Parser, Debug)]
#[command(name = "codechunk")]
#[command(about = "Language-aware code chunking for RAG / code-search ingestion")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// File or directory to chunk. Directories are walked recursively.
    pub path: PathBuf,

    /// Repository name, prefixed onto each chunk's normalized file_path.
    #[arg(long, default_value = "")]
    pub repo: String,

    /// Branch name, carried in each chunk's metadata but not folded into its id.
    #[arg(long)]
    pub branch: Option<String>,

    /// Maximum characters a chunk may contain before the splitter descends
    /// into child nodes. Overrides the loaded configuration.
    #[arg(long)]
    pub max_chars: Option<usize>,

    /// Non-whitespace byte threshold below which a trailing span is merged
    /// into its neighbor. Overrides the loaded configuration.
    #[arg(long)]
    pub coalesce: Option<usize>,

    /// Attach a token count to each chunk's metadata.
    #[arg(long)]
    pub include_tokens: bool,

    /// Optional path to a `chunker.toml` configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format for the chunked result.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// How chunked output is rendered to stdout.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The pipeline's whole-file formatted text: sections and chunk separators.
    #[default]
    Text,
    /// One JSON array of structured chunk records per file.
    Json,
}
