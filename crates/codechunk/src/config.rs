//! Layered configuration: built-in defaults, an optional `chunker.toml`,
//! then the environment overrides named in the external interface.

use std::{env, path::Path, str::FromStr};

use codechunk_domain::ChunkerConfig;
use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Top-level configuration for the `codechunk` binary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    /// Chunking behavior, handed to the library as a plain value object.
    pub chunker: ChunkerConfig,
}

impl Config {
    /// Load configuration: built-in defaults, then `config_path` (if given
    /// and present on disk), then `CHUNKER_MAX_CHARS`/`CHUNKER_COALESCE`/
    /// `GENERATE_AI_DESCRIPTIONS` environment overrides, in that order.
    ///
    /// # Errors
    ///
    /// Returns an error if `config_path` exists but is not valid TOML, or if
    /// the merged layers don't deserialize into [`Config`].
    pub fn load(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if let Some(path) = config_path {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        if let Some(max_chars) = parse_env::<usize>("CHUNKER_MAX_CHARS") {
            figment = figment.merge(Serialized::default("chunker.max_chars", max_chars));
        }
        if let Some(coalesce) = parse_env::<usize>("CHUNKER_COALESCE") {
            figment = figment.merge(Serialized::default("chunker.coalesce", coalesce));
        }
        if let Some(generate_descriptions) = parse_env::<bool>("GENERATE_AI_DESCRIPTIONS") {
            figment = figment.merge(Serialized::default("chunker.generate_descriptions", generate_descriptions));
        }

        figment.extract()
    }
}

fn parse_env<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|value| value.parse().ok())
}
