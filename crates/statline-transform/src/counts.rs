//! Overflow-checked arithmetic on count columns.

use crate::error::{Result, TransformError};

/// Sums the `column` counts of several rows, failing rather than wrapping
/// past `u32::MAX`.
pub(crate) fn sum_counts(column: &str, values: impl IntoIterator<Item = u32>) -> Result<u32> {
    let mut total = 0u32;
    for (idx, value) in values.into_iter().enumerate() {
        total = total
            .checked_add(value)
            .ok_or_else(|| TransformError::CountOverflow {
                column: column.to_string(),
                rows: idx + 1,
            })?;
    }
    Ok(total)
}

/// `total - counted`, failing when the total does not cover what was counted.
pub(crate) fn residual(column: &str, total: u32, counted: u32) -> Result<u32> {
    total
        .checked_sub(counted)
        .ok_or_else(|| TransformError::InconsistentTotal {
            column: column.to_string(),
            total,
            counted,
        })
}
