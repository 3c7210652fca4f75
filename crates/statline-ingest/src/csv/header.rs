//! CSV header parsing and normalization.

/// Header row of an export, as written in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeaders {
    /// Normalized column names, in file order.
    pub columns: Vec<String>,
}

impl CsvHeaders {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Normalizes a header value by trimming whitespace and a UTF-8 BOM.
pub fn normalize_header(value: &str) -> String {
    value.trim().trim_start_matches('\u{feff}').trim().to_string()
}

/// Parses a CSV line into fields, handling quoted values.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                // Check for escaped quote ("")
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                fields.push(normalize_header(&current));
                current.clear();
            }
            _ => {
                current.push(c);
            }
        }
    }

    fields.push(normalize_header(&current));
    fields
}
