//! Unit test suite for codechunk-domain
//!
//! Run with: `cargo test -p codechunk-domain --test unit`

mod error_tests;
mod utils;
mod value_objects;
