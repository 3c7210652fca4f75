//! Fixed column layouts of the whoscored.com export and the enriched output.

/// Column names of the whoscored.com "Tournaments" table, in order.
pub const INPUT_COLUMNS: [&str; 14] = [
    "Season",
    "Team",
    "Tournament",
    "Apps",
    "Mins",
    "Goals",
    "Assists",
    "Yel",
    "Red",
    "SpG",
    "PS%",
    "AerialsWon",
    "MotM",
    "Rating",
];

/// Columns removed by the cleaner. `Tournament` is captured first.
pub const DROPPED_COLUMNS: [&str; 5] = ["Tournament", "Yel", "Red", "MotM", "Rating"];

/// Column names of the enriched table, in output order.
pub const OUTPUT_COLUMNS: [&str; 15] = [
    "Season",
    "Team",
    "Apps_Start",
    "Apps_Sub",
    "Mins",
    "90s_played",
    "Goals",
    "Goalsp90",
    "Assists",
    "Assistsp90",
    "G+A",
    "(G+A)p90",
    "SpG",
    "PS%",
    "AerialsWon",
];

pub mod column {
    pub const SEASON: &str = "Season";
    pub const TEAM: &str = "Team";
    pub const TOURNAMENT: &str = "Tournament";
    pub const APPS: &str = "Apps";
    pub const APPS_START: &str = "Apps_Start";
    pub const APPS_SUB: &str = "Apps_Sub";
    pub const MINS: &str = "Mins";
    pub const GOALS: &str = "Goals";
    pub const ASSISTS: &str = "Assists";
    pub const SHOTS_PER_GAME: &str = "SpG";
    pub const PASS_SUCCESS: &str = "PS%";
    pub const AERIALS_WON: &str = "AerialsWon";
    pub const NINETIES_PLAYED: &str = "90s_played";
    pub const GOALS_P90: &str = "Goalsp90";
    pub const ASSISTS_P90: &str = "Assistsp90";
    pub const GOAL_CONTRIBUTIONS: &str = "G+A";
    pub const CONTRIBUTIONS_P90: &str = "(G+A)p90";
}

/// Season label of the synthetic per-team rows.
pub const COMBINED_SEASON: &str = "Combined";

/// whoscored.com writes this where a metric has no data.
pub const PLACEHOLDER_NO_DATA: &str = "-";

pub const MINUTES_PER_MATCH: f64 = 90.0;
