//! Transformation error types.

use thiserror::Error;

/// Errors raised while transforming a cleaned export.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A cell does not hold the value its column requires.
    ///
    /// `row` is the 1-based data row, header excluded.
    #[error("could not parse {column} value '{value}' in row {row}")]
    Parse {
        row: usize,
        column: String,
        value: String,
    },

    /// The trailing running-total row is smaller than the rows above it.
    #[error("total {column} is {total} but the rows above it already count {counted}")]
    InconsistentTotal {
        column: String,
        total: u32,
        counted: u32,
    },

    /// A count summed over several rows does not fit in a `u32`.
    #[error("{column} summed over {rows} rows exceeds {max}", max = u32::MAX)]
    CountOverflow { column: String, rows: usize },

    /// A row other than the trailing total has no team.
    #[error("row {row} has no team")]
    MissingTeam { row: usize },

    /// Column not found in DataFrame.
    #[error("column '{column}' not found in DataFrame")]
    ColumnNotFound { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
