//! Settling the export's trailing running-total row.
//!
//! whoscored.com closes the table with a row summing every row above it
//! (empty Season and Team in a real export). The appearance split already
//! reduced its appearances to what the rows above do not account for; this
//! stage does the same for minutes, goals and assists and then decides whether
//! anything is left of the row.

use tracing::{debug, warn};

use statline_model::PlayerSeasonRow;
use statline_model::schema::column;

use crate::counts::{residual, sum_counts};
use crate::error::{Result, TransformError};

/// Backs the trailing total out of the table.
///
/// The trailing row is dropped when nothing remains of it after subtracting
/// the rows above. A non-empty remainder is kept as that row's own
/// contribution if it names a team, and dropped with a warning otherwise.
/// Every other row must name a team.
pub fn settle_trailing_total(rows: Vec<PlayerSeasonRow>) -> Result<Vec<PlayerSeasonRow>> {
    let mut rows = rows;
    let Some(mut total) = rows.pop() else {
        return Ok(rows);
    };

    if let Some(idx) = rows.iter().position(|row| row.team.is_empty()) {
        return Err(TransformError::MissingTeam { row: idx + 1 });
    }

    let counted_mins = sum_counts(column::MINS, rows.iter().map(|row| row.mins))?;
    let counted_goals = sum_counts(column::GOALS, rows.iter().map(|row| row.goals))?;
    let counted_assists = sum_counts(column::ASSISTS, rows.iter().map(|row| row.assists))?;
    total.mins = residual(column::MINS, total.mins, counted_mins)?;
    total.goals = residual(column::GOALS, total.goals, counted_goals)?;
    total.assists = residual(column::ASSISTS, total.assists, counted_assists)?;

    let nothing_left =
        total.appearances() == 0 && total.mins == 0 && total.goals == 0 && total.assists == 0;
    if nothing_left {
        debug!(rows = rows.len(), "trailing total matches the rows above");
    } else if total.team.is_empty() {
        warn!(
            apps_start = total.apps_start,
            apps_sub = total.apps_sub,
            mins = total.mins,
            goals = total.goals,
            assists = total.assists,
            "trailing total disagrees with the rows above; remainder dropped"
        );
    } else {
        debug!(team = %total.team, season = %total.season, "trailing row kept as its own entry");
        rows.push(total);
    }
    Ok(rows)
}
