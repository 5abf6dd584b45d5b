// ============================================================
// CSV PARSER
// ============================================================
// Parse the poem table with encoding detection and error handling

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::domain::error::{AppError, Result};
use crate::domain::poem::{CellValue, ColumnSchema, RawRecord};

/// Header row plus raw string rows, in file order
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<StringRecord>,
}

impl CsvTable {
    /// Number of data rows (header excluded)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Project every row onto the resolved body/title columns.
    ///
    /// Cells past the end of a short row are `Missing`, as are empty cells.
    pub fn records(&self, schema: &ColumnSchema) -> Result<Vec<RawRecord>> {
        let body_idx = self.column_index(&schema.body_column).ok_or_else(|| {
            AppError::MissingColumn(format!("'{}' column not found", schema.body_column))
        })?;
        let title_idx = schema
            .title_column
            .as_deref()
            .and_then(|name| self.column_index(name));

        let cell = |row: &StringRecord, idx: Option<usize>| {
            idx.and_then(|i| row.get(i))
                .map(CellValue::from_raw)
                .unwrap_or(CellValue::Missing)
        };

        Ok(self
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| RawRecord::new(index, cell(row, title_idx), cell(row, Some(body_idx))))
            .collect())
    }
}

/// CSV parser with encoding detection
pub struct CsvParser {
    /// Delimiter character (default: comma)
    delimiter: u8,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvParser {
    /// Create a new CSV parser with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse a CSV file
    pub fn parse_file(&self, path: &Path) -> Result<CsvTable> {
        let content = self.read_with_encoding_detection(path)?;
        self.parse_content(&content)
    }

    /// Parse CSV content from string
    pub fn parse_content(&self, content: &str) -> Result<CsvTable> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(Trim::None)
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;
            rows.push(record);
        }

        debug!(rows = rows.len(), columns = headers.len(), "Parsed CSV content");
        Ok(CsvTable { headers, rows })
    }

    /// Read file bytes and decode them, honouring a byte-order mark.
    ///
    /// Without a BOM the bytes are taken as UTF-8; malformed sequences are
    /// replaced rather than rejected.
    fn read_with_encoding_detection(&self, path: &Path) -> Result<String> {
        let buffer = std::fs::read(path).map_err(|e| {
            AppError::IoError(format!("Failed to read CSV file {}: {}", path.display(), e))
        })?;

        let (content, encoding, had_errors) = encoding_rs::UTF_8.decode(&buffer);
        if had_errors {
            warn!(
                path = %path.display(),
                encoding = encoding.name(),
                "CSV file contains malformed byte sequences; they were replaced"
            );
        }

        Ok(content.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::poem::resolve_columns;

    #[test]
    fn test_parse_simple_csv() {
        let content = "Title,Poem,Poet\nOde,\"line one\nline two\",Keats\n";
        let table = CsvParser::new().parse_content(content).unwrap();

        assert_eq!(table.headers, vec!["Title", "Poem", "Poet"]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0].get(1), Some("line one\nline two"));
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let table = CsvParser::new().parse_content("poem\n\"  spaced  \"\n").unwrap();
        assert_eq!(table.rows[0].get(0), Some("  spaced  "));
    }

    #[test]
    fn test_records_follow_schema() {
        let content = "Id,Title,Poem\n1,First,body one\n2,,body two\n3\n";
        let table = CsvParser::new().parse_content(content).unwrap();
        let schema = resolve_columns(&table.headers).unwrap();
        let records = table.records(&schema).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].title, CellValue::Text("First".to_string()));
        assert_eq!(records[0].body, CellValue::Text("body one".to_string()));
        assert_eq!(records[1].title, CellValue::Missing);
        assert_eq!(records[2].body, CellValue::Missing);
        assert_eq!(records[2].index, 2);
    }

    #[test]
    fn test_custom_delimiter() {
        let table = CsvParser::new()
            .with_delimiter(b';')
            .parse_content("title;poem\nA;b, c\n")
            .unwrap();
        assert_eq!(table.rows[0].get(1), Some("b, c"));
    }

    #[test]
    fn test_parse_file_strips_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poems.csv");
        std::fs::write(&path, b"\xEF\xBB\xBFPoem\nverse\n").unwrap();

        let table = CsvParser::new().parse_file(&path).unwrap();
        assert_eq!(table.headers, vec!["Poem"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CsvParser::new()
            .parse_file(Path::new("/nonexistent/poems.csv"))
            .unwrap_err();
        assert!(matches!(err, AppError::IoError(_)));
    }
}
