//! Tests for statline-model types.

use statline_model::{
    DROPPED_COLUMNS, INPUT_COLUMNS, OUTPUT_COLUMNS, PlayerSeasonRow, SeasonLabel, Tournaments,
};

#[test]
fn tournaments_skip_blank_names() {
    let tournaments: Tournaments = ["Premier League", "", "  ", "FA Cup", "Premier League"]
        .into_iter()
        .collect();
    assert_eq!(tournaments.len(), 2);
    assert!(tournaments.contains("FA Cup"));
    assert!(!tournaments.contains(""));
}

#[test]
fn tournaments_render_sorted() {
    let tournaments: Tournaments = ["UEFA Europa League", "Eredivisie", "KNVB Beker"]
        .into_iter()
        .collect();
    assert_eq!(
        tournaments.to_string(),
        "Eredivisie, KNVB Beker, UEFA Europa League"
    );
    assert_eq!(Tournaments::new().to_string(), "");
}

#[test]
fn dropped_columns_are_input_columns() {
    for column in DROPPED_COLUMNS {
        assert!(INPUT_COLUMNS.contains(&column), "{column} not in input");
        assert!(!OUTPUT_COLUMNS.contains(&column), "{column} in output");
    }
}

#[test]
fn output_layout_differs_from_input_layout() {
    assert_ne!(INPUT_COLUMNS.len(), OUTPUT_COLUMNS.len());
    assert_eq!(OUTPUT_COLUMNS[0], "Season");
    assert_eq!(OUTPUT_COLUMNS[1], "Team");
}

#[test]
fn row_counts() {
    let row = PlayerSeasonRow {
        apps_start: 10,
        apps_sub: 2,
        goals: 5,
        assists: 3,
        ..PlayerSeasonRow::empty("TeamA", SeasonLabel::new("2020/21"))
    };
    assert_eq!(row.appearances(), 12);
    assert_eq!(row.goal_contributions(), 8);
}
