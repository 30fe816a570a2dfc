//! Configuration loading and orchestration for the `codechunk` CLI binary.
//!
//! This crate is the only place in the workspace allowed to initialize a
//! `tracing` subscriber or read configuration from disk/environment — the
//! library crates (`codechunk-core`, `codechunk-lang`, `codechunk-ast`,
//! `codechunk-domain`) stay free of process-global concerns.

pub mod cli;
pub mod config;
pub mod run;

pub use cli::{Cli, OutputFormat};
pub use config::Config;
pub use run::run;
