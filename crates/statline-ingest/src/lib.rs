//! whoscored.com export ingestion.
//!
//! Loads the copied "Tournaments" table into a Polars DataFrame, checks that
//! it is the expected table, and cleans it for the transform stages.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use statline_ingest::{
//!     check_input_path, clean, read_csv_schema, read_stats_table, validate_schema,
//! };
//!
//! let path = Path::new("player.csv");
//! check_input_path(path)?;
//! let headers = read_csv_schema(path)?;
//! validate_schema(&headers.columns)?;
//! let df = read_stats_table(path, &headers)?;
//! let cleaned = clean(&df)?;
//! println!("{}", cleaned.tournaments);
//! ```

mod clean;
mod csv;
mod error;
mod schema;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{CsvHeaders, check_input_path, read_csv_schema, read_stats_table};

// === Schema ===
pub use schema::{first_mismatch, validate_schema};

// === Cleaning ===
pub use clean::{CleanedFrame, KEPT_COLUMNS, clean};
