//! Unit test suite for codechunk-core
//!
//! Run with: `cargo test -p codechunk-core --test unit`

mod scenarios;
