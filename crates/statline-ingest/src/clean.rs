//! Cleaning of a validated export.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::debug;

use statline_common::column_texts;
use statline_model::schema::column;
use statline_model::{DROPPED_COLUMNS, INPUT_COLUMNS, PLACEHOLDER_NO_DATA, Tournaments};

use crate::error::{IngestError, Result};

/// Columns that survive cleaning, in input order.
pub const KEPT_COLUMNS: [&str; 9] = [
    "Season",
    "Team",
    "Apps",
    "Mins",
    "Goals",
    "Assists",
    "SpG",
    "PS%",
    "AerialsWon",
];

/// A cleaned export and the competitions it mentioned.
#[derive(Debug, Clone)]
pub struct CleanedFrame {
    /// Text columns listed in [`KEPT_COLUMNS`]; no nulls, no `-` placeholders.
    pub frame: DataFrame,
    pub tournaments: Tournaments,
}

/// Cleans a validated export.
///
/// Missing cells become empty strings, the competition names are collected
/// before the `Tournament` column is dropped together with the unused
/// discipline and rating columns, and the `-` placeholder becomes `0`.
pub fn clean(df: &DataFrame) -> Result<CleanedFrame> {
    let tournaments: Tournaments = text_column(df, column::TOURNAMENT)?
        .iter()
        .map(String::as_str)
        .collect();

    let mut columns: Vec<Column> = Vec::with_capacity(KEPT_COLUMNS.len());
    let mut placeholders = 0usize;
    for name in INPUT_COLUMNS {
        if DROPPED_COLUMNS.contains(&name) {
            continue;
        }
        let values: Vec<String> = text_column(df, name)?
            .into_iter()
            .map(|value| {
                if value == PLACEHOLDER_NO_DATA {
                    placeholders += 1;
                    "0".to_string()
                } else {
                    value
                }
            })
            .collect();
        columns.push(Series::new(name.into(), values).into_column());
    }

    let frame = DataFrame::new(columns)?;
    debug!(
        rows = frame.height(),
        tournaments = tournaments.len(),
        placeholders,
        "cleaned export"
    );
    Ok(CleanedFrame { frame, tournaments })
}

fn text_column(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    if df.column(name).is_err() {
        return Err(IngestError::ColumnNotFound {
            column: name.to_string(),
        });
    }
    Ok(column_texts(df, name)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_frame() -> DataFrame {
        let rows: [[Option<&str>; 14]; 2] = [
            [
                Some("2020/2021"),
                Some("Ajax"),
                Some("Eredivisie"),
                Some("10(2)"),
                Some("900"),
                Some("-"),
                Some("3"),
                Some("1"),
                Some("-"),
                Some("2.1"),
                Some("80.5"),
                Some("1.2"),
                Some("1"),
                Some("7.10"),
            ],
            [
                None,
                None,
                None,
                Some("10(2)"),
                Some("900"),
                Some("0"),
                Some("3"),
                None,
                None,
                Some("2.1"),
                Some("80.5"),
                Some("1.2"),
                None,
                Some("7.10"),
            ],
        ];
        let columns: Vec<Column> = INPUT_COLUMNS
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let values: Vec<Option<&str>> = rows.iter().map(|row| row[idx]).collect();
                Series::new((*name).into(), values).into_column()
            })
            .collect();
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn drops_unused_columns() {
        let cleaned = clean(&raw_frame()).unwrap();
        let names: Vec<String> = cleaned
            .frame
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, KEPT_COLUMNS);
    }

    #[test]
    fn collects_tournaments_without_blanks() {
        let cleaned = clean(&raw_frame()).unwrap();
        assert_eq!(cleaned.tournaments.len(), 1);
        assert!(cleaned.tournaments.contains("Eredivisie"));
    }

    #[test]
    fn fills_missing_and_replaces_placeholder() {
        let cleaned = clean(&raw_frame()).unwrap();
        assert_eq!(column_texts(&cleaned.frame, "Team").unwrap(), vec!["Ajax", ""]);
        assert_eq!(column_texts(&cleaned.frame, "Goals").unwrap(), vec!["0", "0"]);
    }

    #[test]
    fn missing_tournament_column_is_reported() {
        let df = DataFrame::new(vec![
            Series::new("Season".into(), vec!["2020/2021"]).into_column(),
        ])
        .unwrap();
        let err = clean(&df).unwrap_err();
        assert!(matches!(err, IngestError::ColumnNotFound { column } if column == "Tournament"));
    }
}
