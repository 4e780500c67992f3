//! Fuzzing library for arxiv-mcp.
//!
//! This crate provides fuzzing targets for the Atom feed normalizer and
//! the JSON deserialization of tool inputs.
//!
//! # Usage
//!
//! ```bash
//! cd crates/sentinel-fuzz
//! cargo +nightly fuzz run fuzz_feed_normalize -- -max_total_time=60
//! ```

pub use arxiv_mcp::{feed, models};
