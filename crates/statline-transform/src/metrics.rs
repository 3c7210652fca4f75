//! Goal contributions and per-90 rates.

use statline_model::{DerivedRow, MINUTES_PER_MATCH, PlayerSeasonRow};

/// Rate of `count` per 90 minutes given the number of 90s played.
///
/// With no minutes played the rate is 0.0 rather than undefined.
///
/// # Examples
///
/// ```
/// use statline_transform::per_ninety;
///
/// assert_eq!(per_ninety(6, 13.0), 6.0 / 13.0);
/// assert_eq!(per_ninety(3, 0.0), 0.0);
/// ```
pub fn per_ninety(count: u32, nineties_played: f64) -> f64 {
    if nineties_played > 0.0 {
        f64::from(count) / nineties_played
    } else {
        0.0
    }
}

pub fn derive_row(row: &PlayerSeasonRow) -> DerivedRow {
    let goal_contributions = row.goal_contributions();
    let nineties_played = f64::from(row.mins) / MINUTES_PER_MATCH;
    DerivedRow {
        row: row.clone(),
        goal_contributions,
        nineties_played,
        goals_p90: per_ninety(row.goals, nineties_played),
        assists_p90: per_ninety(row.assists, nineties_played),
        contributions_p90: per_ninety(goal_contributions, nineties_played),
    }
}

/// Derives `G+A`, `90s_played` and the per-90 columns for every row,
/// `Combined` rows included.
pub fn derive_metrics(rows: &[PlayerSeasonRow]) -> Vec<DerivedRow> {
    rows.iter().map(derive_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use statline_model::SeasonLabel;

    #[test]
    fn derives_rates_from_totals() {
        let row = PlayerSeasonRow {
            mins: 1170,
            goals: 6,
            assists: 3,
            ..PlayerSeasonRow::empty("TeamA", SeasonLabel::new("2020/21"))
        };
        let derived = derive_row(&row);
        assert_eq!(derived.goal_contributions, 9);
        assert_eq!(derived.nineties_played, 13.0);
        assert_eq!(derived.goals_p90, 6.0 / 13.0);
        assert_eq!(derived.assists_p90, 3.0 / 13.0);
        assert_eq!(derived.contributions_p90, 9.0 / 13.0);
    }

    #[test]
    fn zero_minutes_yields_zero_rates() {
        let row = PlayerSeasonRow {
            goals: 1,
            assists: 2,
            ..PlayerSeasonRow::empty("TeamA", SeasonLabel::new("2020/21"))
        };
        let derived = derive_row(&row);
        assert_eq!(derived.nineties_played, 0.0);
        assert_eq!(derived.goals_p90, 0.0);
        assert_eq!(derived.assists_p90, 0.0);
        assert_eq!(derived.contributions_p90, 0.0);
        assert_eq!(derived.goal_contributions, 3);
    }
}
