//! CSV reading utilities.

mod header;
mod reader;

pub use header::CsvHeaders;
pub use reader::{check_input_path, read_csv_schema, read_stats_table};
