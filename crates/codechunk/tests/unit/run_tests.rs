//! Black-box tests for the CLI's argument parsing and file-driving logic.

use clap::Parser;
use codechunk::{run, Cli, Config, OutputFormat};

#[test]
fn parses_required_path_and_defaults() {
    let cli = Cli::parse_from(["codechunk", "src/main.rs"]);
    assert_eq!(cli.path, std::path::PathBuf::from("src/main.rs"));
    assert_eq!(cli.repo, "");
    assert_eq!(cli.format, OutputFormat::Text);
    assert!(!cli.include_tokens);
}

#[test]
fn parses_all_named_flags() {
    let cli = Cli::parse_from([
        "codechunk",
        "src/",
        "--repo",
        "org/repo",
        "--branch",
        "main",
        "--max-chars",
        "800",
        "--coalesce",
        "50",
        "--include-tokens",
        "--format",
        "json",
    ]);
    assert_eq!(cli.repo, "org/repo");
    assert_eq!(cli.branch.as_deref(), Some("main"));
    assert_eq!(cli.max_chars, Some(800));
    assert_eq!(cli.coalesce, Some(50));
    assert!(cli.include_tokens);
    assert_eq!(cli.format, OutputFormat::Json);
}

#[tokio::test]
async fn run_chunks_a_single_file_without_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("a.py");
    std::fs::write(&file, "def f():\n    return 1\n").expect("write");

    let result = run(&file, "org/repo", None, OutputFormat::Text, Config::default()).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn run_chunks_every_file_in_a_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("a.py"), "x = 1\n").expect("write");
    std::fs::write(dir.path().join("b.py"), "y = 2\n").expect("write");

    let result = run(dir.path(), "org/repo", Some("main"), OutputFormat::Json, Config::default()).await;
    assert!(result.is_ok());
}
