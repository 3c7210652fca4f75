//! Error types for export ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading and cleaning an export.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input path does not exist.
    #[error("invalid path: {path} does not exist")]
    PathNotFound { path: PathBuf },

    /// Input path exists but is not a regular file.
    #[error("invalid path: {path} is not a file")]
    NotAFile { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no header line.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === Schema Errors ===
    /// Header row is not the whoscored.com table header.
    #[error(
        "headers do not match the whoscored.com table: expected [{}], found [{}]",
        expected.join(", "),
        actual.join(", ")
    )]
    SchemaMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    // === DataFrame Errors ===
    /// Column not found in DataFrame.
    #[error("column '{column}' not found in DataFrame")]
    ColumnNotFound { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
