//! Unit test suite for codechunk
//!
//! Run with: `cargo test -p codechunk --test unit`

mod run_tests;
