//! Unit test suite for codechunk-lang
//!
//! Run with: `cargo test -p codechunk-lang --test unit`

#[path = "detection_tests.rs"]
mod detection;

#[path = "language_tests.rs"]
mod language;
