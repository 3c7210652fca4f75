//! Error types for output generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing the enriched table.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Creating, writing or appending to the output file failed.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Polars could not serialize the table.
    #[error("failed to write CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
