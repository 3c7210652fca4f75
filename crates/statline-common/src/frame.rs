//! Polars `AnyValue` utility functions.
//!
//! The ingest stage reads every column as text, so downstream stages only
//! ever need a cell back as a trimmed `String`.

use polars::prelude::{AnyValue, DataFrame, PolarsResult};

/// Converts a Polars `AnyValue` to its trimmed text.
///
/// Returns an empty string for `Null`, which is how the cleaner represents a
/// missing cell.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use statline_common::cell_text;
///
/// assert_eq!(cell_text(AnyValue::Null), "");
/// assert_eq!(cell_text(AnyValue::UInt32(900)), "900");
/// assert_eq!(cell_text(AnyValue::String(" 10(2) ")), "10(2)");
/// ```
pub fn cell_text(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.trim().to_string(),
        AnyValue::StringOwned(s) => s.trim().to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float64(v) => v.to_string(),
        other => other.to_string().trim().to_string(),
    }
}

/// Extracts every cell of a column as trimmed text, in row order.
pub fn column_texts(df: &DataFrame, name: &str) -> PolarsResult<Vec<String>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(cell_text(column.get(idx)?));
    }
    Ok(values)
}
