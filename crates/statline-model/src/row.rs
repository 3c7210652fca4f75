use std::fmt;

use crate::schema::COMBINED_SEASON;

/// Season of a row: a real season from the export, or the synthetic
/// per-team summary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SeasonLabel {
    /// A season as written in the export, e.g. "2020/2021".
    Season(String),
    /// The synthetic all-seasons row appended per team.
    Combined,
}

impl SeasonLabel {
    pub fn new(value: impl Into<String>) -> Self {
        SeasonLabel::Season(value.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            SeasonLabel::Season(value) => value,
            SeasonLabel::Combined => COMBINED_SEASON,
        }
    }

    pub fn is_combined(&self) -> bool {
        matches!(self, SeasonLabel::Combined)
    }
}

impl fmt::Display for SeasonLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Merge key of a row: one player can only have one row per team and season.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey {
    pub team: String,
    pub season: SeasonLabel,
}

/// One player's statistics for a season at a team.
///
/// Starts out as one competition's figures, becomes the whole season after
/// merging, and is also used for the synthetic per-team `Combined` rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSeasonRow {
    pub season: SeasonLabel,
    pub team: String,
    /// Appearances in the starting lineup.
    pub apps_start: u32,
    /// Appearances from the bench.
    pub apps_sub: u32,
    pub mins: u32,
    pub goals: u32,
    pub assists: u32,
    /// Shots per game (`SpG`).
    pub shots_per_game: f64,
    /// Pass success percentage (`PS%`).
    pub pass_success: f64,
    /// Aerial duels won per game (`AerialsWon`).
    pub aerials_won: f64,
}

impl PlayerSeasonRow {
    /// Creates an empty row for a team and season; every figure is zero.
    pub fn empty(team: impl Into<String>, season: SeasonLabel) -> Self {
        Self {
            season,
            team: team.into(),
            apps_start: 0,
            apps_sub: 0,
            mins: 0,
            goals: 0,
            assists: 0,
            shots_per_game: 0.0,
            pass_success: 0.0,
            aerials_won: 0.0,
        }
    }

    pub fn key(&self) -> RowKey {
        RowKey {
            team: self.team.clone(),
            season: self.season.clone(),
        }
    }

    pub fn is_combined(&self) -> bool {
        self.season.is_combined()
    }

    /// Starts plus substitute appearances, saturating at `u32::MAX`.
    pub fn appearances(&self) -> u32 {
        self.apps_start.saturating_add(self.apps_sub)
    }

    /// Goals plus assists (`G+A`), saturating at `u32::MAX`.
    pub fn goal_contributions(&self) -> u32 {
        self.goals.saturating_add(self.assists)
    }
}

/// A row with its derived totals and per-90 rates.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedRow {
    pub row: PlayerSeasonRow,
    pub goal_contributions: u32,
    /// `Mins / 90`.
    pub nineties_played: f64,
    pub goals_p90: f64,
    pub assists_p90: f64,
    pub contributions_p90: f64,
}
