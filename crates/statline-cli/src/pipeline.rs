//! Processing pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: check the path, validate the header, read the export
//! 2. **Clean**: collect tournaments, drop unused columns, replace `-`
//! 3. **Split**: `Apps` into `Apps_Start` and `Apps_Sub`
//! 4. **Merge**: parse rows, settle the trailing total, fold competitions
//! 5. **Aggregate**: append one `Combined` row per team
//! 6. **Derive**: per-90 rates, rounding, output layout
//! 7. **Output**: write the table and footer
//!
//! Each stage takes the output of the previous stage and returns a new value.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use statline_ingest::{
    CleanedFrame, check_input_path, clean, read_csv_schema, read_stats_table, validate_schema,
};
use statline_model::{PlayerSeasonRow, Tournaments};
use statline_output::write_table;
use statline_transform::{
    append_team_totals, derive_metrics, extract_rows, finalize, merge_rows, settle_trailing_total,
    split_appearances,
};

use crate::types::{RunOptions, RunResult};

/// Reads and validates the export.
///
/// The header is read and checked once, before the body is parsed, so a file
/// that is not a whoscored.com table is rejected even when its body would not
/// parse. The loaded frame carries the checked header's names.
pub fn ingest(path: &Path) -> Result<DataFrame> {
    info_span!("ingest", path = %path.display()).in_scope(|| -> Result<_> {
        let start = Instant::now();
        check_input_path(path)?;
        let headers = read_csv_schema(path)?;
        validate_schema(&headers.columns)?;
        let df = read_stats_table(path, &headers)?;
        info!(
            rows = df.height(),
            columns = df.width(),
            duration_ms = start.elapsed().as_millis(),
            "ingest complete"
        );
        Ok(df)
    })
}

pub fn clean_export(df: &DataFrame) -> Result<CleanedFrame> {
    info_span!("clean").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let cleaned = clean(df).context("clean export")?;
        info!(
            rows = cleaned.frame.height(),
            tournaments = cleaned.tournaments.len(),
            duration_ms = start.elapsed().as_millis(),
            "clean complete"
        );
        Ok(cleaned)
    })
}

pub fn split(df: &DataFrame) -> Result<DataFrame> {
    info_span!("split").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let split = split_appearances(df).context("split appearances")?;
        info!(
            rows = split.height(),
            duration_ms = start.elapsed().as_millis(),
            "split complete"
        );
        Ok(split)
    })
}

/// Parses the split table, settles its trailing total and folds competitions
/// of the same team and season.
pub fn merge(df: &DataFrame) -> Result<Vec<PlayerSeasonRow>> {
    info_span!("merge").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let rows = extract_rows(df).context("parse rows")?;
        let input_rows = rows.len();
        let settled = settle_trailing_total(rows).context("settle trailing total")?;
        let merged = merge_rows(&settled).context("merge competitions")?;
        info!(
            input_rows,
            settled_rows = settled.len(),
            output_rows = merged.len(),
            duration_ms = start.elapsed().as_millis(),
            "merge complete"
        );
        Ok(merged)
    })
}

pub fn aggregate(rows: Vec<PlayerSeasonRow>) -> Result<Vec<PlayerSeasonRow>> {
    info_span!("aggregate").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let season_rows = rows.len();
        let rows = append_team_totals(rows).context("append team totals")?;
        info!(
            season_rows,
            combined_rows = rows.len() - season_rows,
            duration_ms = start.elapsed().as_millis(),
            "aggregate complete"
        );
        Ok(rows)
    })
}

/// Derives the per-90 columns and builds the output table.
pub fn derive(rows: &[PlayerSeasonRow]) -> Result<DataFrame> {
    info_span!("derive").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let table = finalize(&derive_metrics(rows)).context("build output table")?;
        info!(
            rows = table.height(),
            columns = table.width(),
            duration_ms = start.elapsed().as_millis(),
            "derive complete"
        );
        Ok(table)
    })
}

/// Writes the table and footer unless this is a dry run.
pub fn output(
    table: &mut DataFrame,
    tournaments: &Tournaments,
    options: &RunOptions,
) -> Result<Option<PathBuf>> {
    let path = options.output_path();
    info_span!("output", path = %path.display()).in_scope(|| -> Result<_> {
        let start = Instant::now();
        if options.dry_run {
            info!(
                rows = table.height(),
                duration_ms = start.elapsed().as_millis(),
                "output skipped (dry run)"
            );
            return Ok(None);
        }
        write_table(path, table, tournaments)
            .with_context(|| format!("write {}", path.display()))?;
        info!(
            rows = table.height(),
            duration_ms = start.elapsed().as_millis(),
            "output complete"
        );
        Ok(Some(path.to_path_buf()))
    })
}

/// Runs every stage on `options.input`.
pub fn run(options: &RunOptions) -> Result<RunResult> {
    let start = Instant::now();
    let source = ingest(&options.input)?;
    let source_rows = source.height();
    let CleanedFrame { frame, tournaments } = clean_export(&source)?;
    let split = split(&frame)?;
    let merged = merge(&split)?;
    let rows = aggregate(merged)?;
    let mut table = derive(&rows)?;
    let written = output(&mut table, &tournaments, options)?;
    info!(
        input = %options.input.display(),
        rows = table.height(),
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );
    Ok(RunResult {
        input: options.input.clone(),
        written,
        tournaments,
        table,
        source_rows,
    })
}
