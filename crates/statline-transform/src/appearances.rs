//! Splitting the combined `Apps` column.
//!
//! whoscored.com writes appearances as `N` (starts only) or `N(M)` (starts
//! and substitute appearances). The last row of an export is the running total
//! of the rows above it, so its pair is replaced by what remains after backing
//! out those rows.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::debug;

use statline_common::column_texts;
use statline_model::schema::column;

use crate::counts::{residual, sum_counts};
use crate::error::{Result, TransformError};

/// Parses an appearance cell into `(starts, substitute appearances)`.
///
/// # Examples
///
/// ```
/// use statline_transform::parse_appearances;
///
/// assert_eq!(parse_appearances("10(2)"), Some((10, 2)));
/// assert_eq!(parse_appearances("13"), Some((13, 0)));
/// assert_eq!(parse_appearances(" 7 (1) "), Some((7, 1)));
/// assert_eq!(parse_appearances("10(2"), None);
/// assert_eq!(parse_appearances(""), None);
/// ```
pub fn parse_appearances(raw: &str) -> Option<(u32, u32)> {
    let value = raw.trim();
    match value.split_once('(') {
        None => Some((value.parse().ok()?, 0)),
        Some((starts, rest)) => {
            let subs = rest.trim_end().strip_suffix(')')?;
            Some((starts.trim().parse().ok()?, subs.trim().parse().ok()?))
        }
    }
}

/// Replaces `Apps` with `Apps_Start` and `Apps_Sub` columns.
///
/// The last row is taken to be the running total of the export and becomes
/// `total - sum of the rows above`, so the two new columns sum to the total.
pub fn split_appearances(df: &DataFrame) -> Result<DataFrame> {
    if df.column(column::APPS).is_err() {
        return Err(TransformError::ColumnNotFound {
            column: column::APPS.to_string(),
        });
    }

    let mut pairs = Vec::with_capacity(df.height());
    for (idx, raw) in column_texts(df, column::APPS)?.into_iter().enumerate() {
        let pair = parse_appearances(&raw).ok_or_else(|| TransformError::Parse {
            row: idx + 1,
            column: column::APPS.to_string(),
            value: raw.clone(),
        })?;
        pairs.push(pair);
    }

    if let Some(last) = pairs.len().checked_sub(1) {
        let (total_start, total_sub) = pairs[last];
        let counted_start = sum_counts(column::APPS_START, pairs[..last].iter().map(|p| p.0))?;
        let counted_sub = sum_counts(column::APPS_SUB, pairs[..last].iter().map(|p| p.1))?;
        let corrected = (
            residual(column::APPS_START, total_start, counted_start)?,
            residual(column::APPS_SUB, total_sub, counted_sub)?,
        );
        debug!(
            total_start,
            total_sub,
            residual_start = corrected.0,
            residual_sub = corrected.1,
            "corrected trailing appearance total"
        );
        pairs[last] = corrected;
    }

    let starts: Vec<u32> = pairs.iter().map(|(start, _)| *start).collect();
    let subs: Vec<u32> = pairs.iter().map(|(_, sub)| *sub).collect();

    let mut columns: Vec<Column> = Vec::with_capacity(df.width() + 1);
    for existing in df.get_columns() {
        if existing.name().as_str() == column::APPS {
            columns.push(Series::new(column::APPS_START.into(), starts.clone()).into_column());
            columns.push(Series::new(column::APPS_SUB.into(), subs.clone()).into_column());
        } else {
            columns.push(existing.clone());
        }
    }
    Ok(DataFrame::new(columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apps_frame(values: &[&str]) -> DataFrame {
        DataFrame::new(vec![
            Series::new("Team".into(), vec!["TeamA"; values.len()]).into_column(),
            Series::new("Apps".into(), values.to_vec()).into_column(),
            Series::new("Mins".into(), vec!["0"; values.len()]).into_column(),
        ])
        .unwrap()
    }

    fn split_pairs(df: &DataFrame) -> Vec<(String, String)> {
        let starts = column_texts(df, "Apps_Start").unwrap();
        let subs = column_texts(df, "Apps_Sub").unwrap();
        starts.into_iter().zip(subs).collect()
    }

    #[test]
    fn replaces_apps_in_place() {
        let split = split_appearances(&apps_frame(&["10(2)", "3(1)", "13(3)"])).unwrap();
        let names: Vec<String> = split
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, vec!["Team", "Apps_Start", "Apps_Sub", "Mins"]);
    }

    #[test]
    fn trailing_total_is_backed_out() {
        let split = split_appearances(&apps_frame(&["10(2)", "3(1)", "13(3)"])).unwrap();
        let pairs = split_pairs(&split);
        assert_eq!(pairs[0], ("10".to_string(), "2".to_string()));
        assert_eq!(pairs[1], ("3".to_string(), "1".to_string()));
        assert_eq!(pairs[2], ("0".to_string(), "0".to_string()));
    }

    #[test]
    fn trailing_row_keeps_unaccounted_remainder() {
        let split = split_appearances(&apps_frame(&["10", "12(1)"])).unwrap();
        assert_eq!(split_pairs(&split)[1], ("2".to_string(), "1".to_string()));
    }

    #[test]
    fn malformed_value_reports_row() {
        let err = split_appearances(&apps_frame(&["10(2)", "x", "10(2)"])).unwrap_err();
        match err {
            TransformError::Parse { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "Apps");
                assert_eq!(value, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn short_total_is_inconsistent() {
        let err = split_appearances(&apps_frame(&["10(2)", "3(1)", "5(3)"])).unwrap_err();
        assert!(matches!(
            err,
            TransformError::InconsistentTotal { total: 5, counted: 13, .. }
        ));
    }

    #[test]
    fn oversized_rows_overflow_instead_of_wrapping() {
        let err = split_appearances(&apps_frame(&["4294967295", "1", "0"])).unwrap_err();
        assert!(matches!(err, TransformError::CountOverflow { .. }));
    }

    #[test]
    fn empty_frame_splits_to_empty() {
        let split = split_appearances(&apps_frame(&[])).unwrap();
        assert_eq!(split.height(), 0);
        assert!(split.column("Apps_Start").is_ok());
    }
}
