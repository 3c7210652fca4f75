//! Shared utilities for statline crates.
//!
//! This crate provides the cell-level helpers used across the workspace:
//! reading Polars values back as text, and parsing the count and rate cells
//! found in a whoscored.com export.

pub mod frame;
pub mod numeric;

// Re-export commonly used functions at crate root for convenience
pub use frame::{cell_text, column_texts};
pub use numeric::{parse_count, parse_rate, round_to};
