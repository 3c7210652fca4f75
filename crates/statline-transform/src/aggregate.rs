//! Per-team `Combined` rows.

use tracing::debug;

use statline_model::{PlayerSeasonRow, SeasonLabel};

use crate::error::Result;
use crate::merge::combine_rows;

/// Appends one `Combined` row per team after all season rows.
///
/// Teams appear in the order they first appear in `rows`. Counts are summed
/// over the team's season rows and the rate statistics averaged over them,
/// unweighted. Rows without a team and existing `Combined` rows do not
/// contribute.
pub fn append_team_totals(rows: Vec<PlayerSeasonRow>) -> Result<Vec<PlayerSeasonRow>> {
    let mut teams: Vec<&str> = Vec::new();
    for row in &rows {
        if row.is_combined() || row.team.is_empty() {
            continue;
        }
        if !teams.contains(&row.team.as_str()) {
            teams.push(&row.team);
        }
    }

    let mut totals = Vec::with_capacity(teams.len());
    for team in teams {
        let seasons = rows
            .iter()
            .filter(|row| !row.is_combined() && row.team == team);
        let total = combine_rows(team, SeasonLabel::Combined, seasons)?;
        debug!(
            team,
            appearances = total.appearances(),
            mins = total.mins,
            "team total"
        );
        totals.push(total);
    }

    let mut rows = rows;
    rows.extend(totals);
    Ok(rows)
}
