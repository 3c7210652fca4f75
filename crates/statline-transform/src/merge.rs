//! Folding competitions of the same team and season into one row.
//!
//! A season at one club often spans a league and a cup, which the export
//! lists as separate rows. Counts are summed; the rate statistics are a plain
//! mean over the folded rows, not weighted by minutes.

use std::collections::BTreeMap;

use tracing::debug;

use statline_model::schema::column;
use statline_model::{PlayerSeasonRow, RowKey, SeasonLabel};

use crate::counts::sum_counts;
use crate::error::Result;

/// Folds rows into a single row for `team` and `season`.
///
/// Counts are summed and `SpG`, `PS%` and `AerialsWon` averaged over the
/// folded rows. With no rows the result is an all-zero row. A count that
/// no longer fits a `u32` is an error.
pub fn combine_rows<'a>(
    team: &str,
    season: SeasonLabel,
    rows: impl IntoIterator<Item = &'a PlayerSeasonRow>,
) -> Result<PlayerSeasonRow> {
    let rows: Vec<&PlayerSeasonRow> = rows.into_iter().collect();
    let mut combined = PlayerSeasonRow::empty(team, season);
    combined.apps_start = sum_counts(column::APPS_START, rows.iter().map(|r| r.apps_start))?;
    combined.apps_sub = sum_counts(column::APPS_SUB, rows.iter().map(|r| r.apps_sub))?;
    combined.mins = sum_counts(column::MINS, rows.iter().map(|r| r.mins))?;
    combined.goals = sum_counts(column::GOALS, rows.iter().map(|r| r.goals))?;
    combined.assists = sum_counts(column::ASSISTS, rows.iter().map(|r| r.assists))?;
    if !rows.is_empty() {
        let count = rows.len() as f64;
        combined.shots_per_game = rows.iter().map(|r| r.shots_per_game).sum::<f64>() / count;
        combined.pass_success = rows.iter().map(|r| r.pass_success).sum::<f64>() / count;
        combined.aerials_won = rows.iter().map(|r| r.aerials_won).sum::<f64>() / count;
    }
    Ok(combined)
}

/// Merges rows sharing a team and season.
///
/// Rows are grouped by key regardless of adjacency. Each merged row takes the
/// place of the last row of its group, so surviving rows keep their relative
/// order. Running it on its own output changes nothing.
pub fn merge_rows(rows: &[PlayerSeasonRow]) -> Result<Vec<PlayerSeasonRow>> {
    let mut groups: BTreeMap<RowKey, Vec<usize>> = BTreeMap::new();
    for (idx, row) in rows.iter().enumerate() {
        groups.entry(row.key()).or_default().push(idx);
    }

    let mut merged = Vec::with_capacity(groups.len());
    for (idx, row) in rows.iter().enumerate() {
        let Some(members) = groups.get(&row.key()) else {
            continue;
        };
        if members.last() != Some(&idx) {
            continue;
        }
        if members.len() > 1 {
            debug!(
                team = %row.team,
                season = %row.season,
                rows = members.len(),
                "merging competitions"
            );
        }
        merged.push(combine_rows(
            &row.team,
            row.season.clone(),
            members.iter().map(|&member| &rows[member]),
        )?);
    }
    Ok(merged)
}
