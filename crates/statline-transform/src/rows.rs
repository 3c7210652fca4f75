//! Typed rows from the split text frame.

use polars::prelude::DataFrame;

use statline_common::{column_texts, parse_count, parse_rate};
use statline_model::schema::column;
use statline_model::{PlayerSeasonRow, SeasonLabel};

use crate::error::{Result, TransformError};

/// Parses a cleaned, split frame into one [`PlayerSeasonRow`] per row.
///
/// Empty numeric cells are missing data and read as zero; anything else that
/// is not a number fails with the row, column and raw value.
pub fn extract_rows(df: &DataFrame) -> Result<Vec<PlayerSeasonRow>> {
    let seasons = texts(df, column::SEASON)?;
    let teams = texts(df, column::TEAM)?;
    let apps_start = counts(df, column::APPS_START)?;
    let apps_sub = counts(df, column::APPS_SUB)?;
    let mins = counts(df, column::MINS)?;
    let goals = counts(df, column::GOALS)?;
    let assists = counts(df, column::ASSISTS)?;
    let shots = rates(df, column::SHOTS_PER_GAME)?;
    let passes = rates(df, column::PASS_SUCCESS)?;
    let aerials = rates(df, column::AERIALS_WON)?;

    let rows = (0..df.height())
        .map(|idx| PlayerSeasonRow {
            season: SeasonLabel::new(seasons[idx].clone()),
            team: teams[idx].clone(),
            apps_start: apps_start[idx],
            apps_sub: apps_sub[idx],
            mins: mins[idx],
            goals: goals[idx],
            assists: assists[idx],
            shots_per_game: shots[idx],
            pass_success: passes[idx],
            aerials_won: aerials[idx],
        })
        .collect();
    Ok(rows)
}

fn texts(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    if df.column(name).is_err() {
        return Err(TransformError::ColumnNotFound {
            column: name.to_string(),
        });
    }
    Ok(column_texts(df, name)?)
}

fn counts(df: &DataFrame, name: &str) -> Result<Vec<u32>> {
    parse_column(df, name, parse_count)
}

fn rates(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    parse_column(df, name, parse_rate)
}

fn parse_column<T>(df: &DataFrame, name: &str, parse: fn(&str) -> Option<T>) -> Result<Vec<T>> {
    texts(df, name)?
        .into_iter()
        .enumerate()
        .map(|(idx, raw)| {
            parse(&raw).ok_or_else(|| TransformError::Parse {
                row: idx + 1,
                column: name.to_string(),
                value: raw,
            })
        })
        .collect()
}
