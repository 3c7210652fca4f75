//! Output frame in the enriched column layout.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use statline_common::round_to;
use statline_model::schema::column;
use statline_model::{DerivedRow, OUTPUT_COLUMNS};

use crate::error::Result;

/// Decimal places kept for every float column.
pub const FLOAT_DECIMALS: u32 = 2;

/// Builds the output frame: counts as `UInt32`, floats rounded to
/// [`FLOAT_DECIMALS`], columns in [`OUTPUT_COLUMNS`] order.
pub fn finalize(rows: &[DerivedRow]) -> Result<DataFrame> {
    let text = |name: &str, value: fn(&DerivedRow) -> String| -> Column {
        let values: Vec<String> = rows.iter().map(value).collect();
        Series::new(name.into(), values).into_column()
    };
    let count = |name: &str, value: fn(&DerivedRow) -> u32| -> Column {
        let values: Vec<u32> = rows.iter().map(value).collect();
        Series::new(name.into(), values).into_column()
    };
    let float = |name: &str, value: fn(&DerivedRow) -> f64| -> Column {
        let values: Vec<f64> = rows
            .iter()
            .map(|row| round_to(value(row), FLOAT_DECIMALS))
            .collect();
        Series::new(name.into(), values).into_column()
    };

    let columns = vec![
        text(column::SEASON, |d| d.row.season.to_string()),
        text(column::TEAM, |d| d.row.team.clone()),
        count(column::APPS_START, |d| d.row.apps_start),
        count(column::APPS_SUB, |d| d.row.apps_sub),
        count(column::MINS, |d| d.row.mins),
        float(column::NINETIES_PLAYED, |d| d.nineties_played),
        count(column::GOALS, |d| d.row.goals),
        float(column::GOALS_P90, |d| d.goals_p90),
        count(column::ASSISTS, |d| d.row.assists),
        float(column::ASSISTS_P90, |d| d.assists_p90),
        count(column::GOAL_CONTRIBUTIONS, |d| d.goal_contributions),
        float(column::CONTRIBUTIONS_P90, |d| d.contributions_p90),
        float(column::SHOTS_PER_GAME, |d| d.row.shots_per_game),
        float(column::PASS_SUCCESS, |d| d.row.pass_success),
        float(column::AERIALS_WON, |d| d.row.aerials_won),
    ];
    debug_assert_eq!(columns.len(), OUTPUT_COLUMNS.len());

    Ok(DataFrame::new(columns)?)
}
