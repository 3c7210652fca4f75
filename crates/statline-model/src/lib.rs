//! Data model for whoscored.com player season tables.
//!
//! - **schema**: the fixed input and output column layouts
//! - **row**: [`PlayerSeasonRow`] and its season label
//! - **tournaments**: the competition names captured during cleaning

pub mod row;
pub mod schema;
pub mod tournaments;

pub use row::{DerivedRow, PlayerSeasonRow, RowKey, SeasonLabel};
pub use schema::{
    COMBINED_SEASON, DROPPED_COLUMNS, INPUT_COLUMNS, MINUTES_PER_MATCH, OUTPUT_COLUMNS,
    PLACEHOLDER_NO_DATA,
};
pub use tournaments::Tournaments;
