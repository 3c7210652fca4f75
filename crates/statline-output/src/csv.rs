//! Writing the enriched table to disk.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::debug;

use statline_model::Tournaments;

use crate::error::{OutputError, Result};
use crate::footer::render_footer;

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Writes `df` as CSV to `path`, truncating it, then appends the footer.
///
/// The table is written with a header row and without an index column.
pub fn write_table(path: &Path, df: &mut DataFrame, tournaments: &Tournaments) -> Result<()> {
    let write_err = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    CsvWriter::new(&mut writer)
        .include_header(true)
        .finish(df)
        .map_err(|e| OutputError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    writer.flush().map_err(write_err)?;
    drop(writer);

    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(write_err)?;
    file.write_all(render_footer(tournaments).as_bytes())
        .map_err(write_err)?;

    debug!(
        path = %path.display(),
        rows = df.height(),
        tournaments = tournaments.len(),
        "wrote enriched table"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};
    use tempfile::tempdir;

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("Season".into(), vec!["2020/21", "Combined"]).into_column(),
            Series::new("Team".into(), vec!["Ajax", "Ajax"]).into_column(),
            Series::new("Mins".into(), vec![1170u32, 1170]).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn writes_table_then_footer() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("player.csv");
        let tournaments: Tournaments = ["Eredivisie"].into_iter().collect();

        write_table(&path, &mut frame(), &tournaments).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines[0], "Season,Team,Mins");
        assert_eq!(lines[1], "2020/21,Ajax,1170");
        assert_eq!(lines[2], "Combined,Ajax,1170");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "List of all tournaments: Eredivisie");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("player.csv");
        fs::write(&path, "stale contents that are longer than nothing\n".repeat(50)).unwrap();

        write_table(&path, &mut frame(), &Tournaments::new()).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Season,Team,Mins\n"));
        assert!(!written.contains("stale"));
    }

    #[test]
    fn creates_missing_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("player.csv");
        write_table(&path, &mut frame(), &Tournaments::new()).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn unwritable_path_is_reported() {
        let dir = tempdir().unwrap();
        let err = write_table(dir.path(), &mut frame(), &Tournaments::new()).unwrap_err();
        assert!(matches!(err, OutputError::Write { .. }));
    }
}
