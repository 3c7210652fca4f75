//! Loading the export file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};

use super::header::{CsvHeaders, parse_csv_line};

/// Checks that the input path names an existing regular file.
pub fn check_input_path(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::PathNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if !metadata.is_file() {
        return Err(IngestError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

/// Reads the header line of a CSV file.
pub fn read_csv_schema(path: &Path) -> Result<CsvHeaders> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::PathNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let mut first = String::new();
    let read = BufReader::new(file)
        .read_line(&mut first)
        .map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    let line = first.trim_end_matches(['\r', '\n']);
    if read == 0 || line.trim().is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    Ok(CsvHeaders::new(parse_csv_line(line)))
}

/// Reads an export into a Polars DataFrame.
///
/// Every column is read as text: the export mixes numbers with `-`
/// placeholders and `N(M)` appearance cells, which the transform stages parse
/// themselves. The columns are renamed to `headers`, the normalized header
/// read by [`read_csv_schema`], so the frame carries the same names schema
/// validation looked at.
pub fn read_stats_table(path: &Path, headers: &CsvHeaders) -> Result<DataFrame> {
    let csv_err = |e: polars::prelude::PolarsError| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(csv_err)?
        .finish()
        .map_err(csv_err)?;

    if df.width() != headers.len() {
        return Err(IngestError::CsvParse {
            path: path.to_path_buf(),
            message: format!(
                "header has {} columns but the table has {}",
                headers.len(),
                df.width()
            ),
        });
    }
    df.set_column_names(headers.columns.iter().map(String::as_str))?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded export"
    );

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_check_input_path_missing() {
        let result = check_input_path(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(IngestError::PathNotFound { .. })));
    }

    #[test]
    fn test_check_input_path_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = check_input_path(dir.path());
        assert!(matches!(result, Err(IngestError::NotAFile { .. })));
    }

    #[test]
    fn test_read_csv_schema_with_bom() {
        let file = create_temp_csv("\u{feff}A,B,C\r\n1,2,3\n");
        let headers = read_csv_schema(file.path()).unwrap();
        assert_eq!(headers.columns, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_read_csv_schema_empty_file() {
        let file = create_temp_csv("");
        let result = read_csv_schema(file.path());
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_read_stats_table_reads_text() {
        let file = create_temp_csv("Apps,Mins\n10(2),900\n-,0\n");
        let headers = read_csv_schema(file.path()).unwrap();
        let df = read_stats_table(file.path(), &headers).unwrap();

        assert_eq!(headers.columns, vec!["Apps", "Mins"]);
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 2);
        assert_eq!(
            df.column("Mins").unwrap().dtype(),
            &polars::prelude::DataType::String
        );
    }

    #[test]
    fn test_read_stats_table_uses_normalized_names() {
        let file = create_temp_csv("\u{feff}Season, Team , Mins\n2020/2021, Ajax, 900\n");
        let headers = read_csv_schema(file.path()).unwrap();
        let df = read_stats_table(file.path(), &headers).unwrap();

        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, vec!["Season", "Team", "Mins"]);
        assert!(df.column("Team").is_ok());
    }
}
