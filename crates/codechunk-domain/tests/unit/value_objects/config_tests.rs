//! Unit tests for chunking configuration value objects.

use codechunk_domain::{ChunkerConfig, FallbackConfig, NotebookConfig};

#[test]
fn chunker_config_defaults_match_external_interface() {
    let config = ChunkerConfig::default();

    assert_eq!(config.max_chars, 1500);
    assert_eq!(config.coalesce, 100);
    assert!(!config.include_tokens);
    assert!(!config.generate_descriptions);
    assert_eq!(config.max_concurrent_files, 5);
}

#[test]
fn fallback_config_defaults() {
    let config = FallbackConfig::default();
    assert_eq!(config.chunk_size, 40);
    assert_eq!(config.overlap, 15);
    assert!(config.overlap < config.chunk_size);
}

#[test]
fn notebook_config_default_max_chars_differs_from_chunker_default() {
    let notebook = NotebookConfig::default();
    let chunker = ChunkerConfig::default();

    assert_eq!(notebook.max_chars, 2000);
    assert_ne!(notebook.max_chars, chunker.max_chars);
}

#[test]
fn chunker_config_round_trips_through_json() {
    let config = ChunkerConfig {
        max_chars: 800,
        ..ChunkerConfig::default()
    };

    let json = serde_json::to_string(&config).expect("serializes");
    let restored: ChunkerConfig = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(config, restored);
}

#[test]
fn chunker_config_deserializes_partial_json_with_defaults() {
    let restored: ChunkerConfig =
        serde_json::from_str(r#"{"max_chars": 2400}"#).expect("deserializes");

    assert_eq!(restored.max_chars, 2400);
    assert_eq!(restored.coalesce, ChunkerConfig::default().coalesce);
}
