use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;

use statline_model::Tournaments;

/// What to run and where to write it.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// The whoscored.com export to read.
    pub input: PathBuf,
    /// Destination; the input is overwritten when `None`.
    pub output: Option<PathBuf>,
    /// Run every stage but write nothing.
    pub dry_run: bool,
}

impl RunOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Where the enriched table goes.
    pub fn output_path(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.input)
    }
}

#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    /// `None` on a dry run.
    pub written: Option<PathBuf>,
    pub tournaments: Tournaments,
    /// The enriched table as written.
    pub table: DataFrame,
    /// Data rows in the export, trailing total included.
    pub source_rows: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_input_by_default() {
        let options = RunOptions::new("player.csv");
        assert_eq!(options.output_path(), Path::new("player.csv"));
        assert!(!options.dry_run);
    }

    #[test]
    fn explicit_output_wins() {
        let options = RunOptions::new("player.csv")
            .with_output(Some(PathBuf::from("enriched.csv")))
            .with_dry_run(true);
        assert_eq!(options.output_path(), Path::new("enriched.csv"));
        assert!(options.dry_run);
    }
}
