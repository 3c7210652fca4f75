//! Header validation against the whoscored.com table layout.

use statline_model::INPUT_COLUMNS;

use crate::error::{IngestError, Result};

/// Checks that the header is exactly the whoscored.com table header.
///
/// Order matters. This only looks at the header: a table with missing rows
/// still passes.
pub fn validate_schema(columns: &[String]) -> Result<()> {
    if columns.iter().map(String::as_str).eq(INPUT_COLUMNS) {
        return Ok(());
    }
    if let Some((idx, expected, found)) = first_mismatch(columns) {
        tracing::debug!(position = idx, expected, found, "header mismatch");
    }
    Err(IngestError::SchemaMismatch {
        expected: INPUT_COLUMNS.iter().map(|c| (*c).to_string()).collect(),
        actual: columns.to_vec(),
    })
}

/// Returns the first position where the header departs from the expected one,
/// with the expected and found names (empty when a column is missing).
pub fn first_mismatch(columns: &[String]) -> Option<(usize, &'static str, &str)> {
    let width = columns.len().max(INPUT_COLUMNS.len());
    (0..width).find_map(|idx| {
        let expected = INPUT_COLUMNS.get(idx).copied().unwrap_or("");
        let found = columns.get(idx).map(String::as_str).unwrap_or("");
        (expected != found).then_some((idx, expected, found))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_header() -> Vec<String> {
        INPUT_COLUMNS.iter().map(|c| (*c).to_string()).collect()
    }

    #[test]
    fn accepts_exact_header() {
        assert!(validate_schema(&expected_header()).is_ok());
    }

    #[test]
    fn rejects_reordered_header() {
        let mut header = expected_header();
        header.swap(0, 1);
        let err = validate_schema(&header).unwrap_err();
        assert!(matches!(err, IngestError::SchemaMismatch { .. }));
        assert_eq!(first_mismatch(&header), Some((0, "Season", "Team")));
    }

    #[test]
    fn rejects_truncated_header() {
        let header: Vec<String> = expected_header().into_iter().take(12).collect();
        assert!(validate_schema(&header).is_err());
        assert_eq!(first_mismatch(&header), Some((12, "MotM", "")));
    }

    #[test]
    fn rejects_extra_column() {
        let mut header = expected_header();
        header.push("xG".to_string());
        assert!(validate_schema(&header).is_err());
        assert_eq!(first_mismatch(&header), Some((14, "", "xG")));
    }
}
