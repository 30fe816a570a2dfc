//! `codechunk` — language-aware code chunking CLI.

use std::process::ExitCode;

use clap::Parser;
use codechunk::{cli::Cli, config::Config, run};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();

    let cli = Cli::parse();

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    if let Some(max_chars) = cli.max_chars {
        config.chunker.max_chars = max_chars;
    }
    if let Some(coalesce) = cli.coalesce {
        config.chunker.coalesce = coalesce;
    }
    config.chunker.include_tokens = config.chunker.include_tokens || cli.include_tokens;

    if let Err(err) = run(&cli.path, &cli.repo, cli.branch.as_deref(), cli.format, config).await {
        tracing::error!(error = %err, "codechunk failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
