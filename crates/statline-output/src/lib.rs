//! Output generation for enriched player tables.
//!
//! The finalized table is written as CSV with a header row, followed by a
//! short free-text footer listing the competitions the export covered and
//! where the data came from.

mod csv;
mod error;
mod footer;

pub use csv::{ensure_parent_dir, write_table};
pub use error::{OutputError, Result};
pub use footer::{FOOTER_DATA_SOURCE, FOOTER_ROUNDING, render_footer};
