//! Table transformation stages for whoscored.com player tables.
//!
//! Each stage takes the previous stage's table and returns a new one:
//!
//! - **appearances**: split `Apps` into starts and substitute appearances
//! - **rows**: parse the cleaned text frame into [`PlayerSeasonRow`]s
//! - **totals**: back out the export's trailing running-total row
//! - **merge**: fold competitions of the same team and season into one row
//! - **aggregate**: append one `Combined` row per team
//! - **metrics**: goal contributions and per-90 rates
//! - **finalize**: rounding, types, and output column order
//!
//! [`PlayerSeasonRow`]: statline_model::PlayerSeasonRow

pub mod aggregate;
pub mod appearances;
mod counts;
mod error;
pub mod finalize;
pub mod merge;
pub mod metrics;
pub mod rows;
pub mod totals;

pub use aggregate::append_team_totals;
pub use appearances::{parse_appearances, split_appearances};
pub use error::{Result, TransformError};
pub use finalize::{FLOAT_DECIMALS, finalize};
pub use merge::{combine_rows, merge_rows};
pub use metrics::{derive_metrics, derive_row, per_ninety};
pub use rows::extract_rows;
pub use totals::settle_trailing_total;
