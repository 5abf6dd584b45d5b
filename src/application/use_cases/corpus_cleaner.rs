// ============================================================
// CORPUS CLEANER USE CASE
// ============================================================
// Orchestrate table parsing, per-record normalization and corpus output

use std::path::Path;
use std::time::Instant;

use tracing::{info, warn};

use super::poem_normalizer::{normalize_record, RecordOutcome};
use crate::domain::error::{AppError, Result};
use crate::domain::pipeline_config::CleaningConfig;
use crate::domain::poem::{
    is_text_space, resolve_columns, CleanedCorpus, CleaningSummary, RawRecord,
};
use crate::infrastructure::csv::{CsvParser, CsvTable};
use crate::infrastructure::storage::write_corpus;

/// Poem corpus cleaning use case
pub struct CorpusCleaner {
    config: CleaningConfig,
}

impl CorpusCleaner {
    /// Create a new corpus cleaner
    pub fn new(config: CleaningConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration
    pub fn default_config() -> Self {
        Self::new(CleaningConfig::default())
    }

    /// Clean a CSV file and write the accepted records to `output`.
    ///
    /// Unreadable input and a missing poem column abort before any record is
    /// processed; bad rows only show up in the summary counters.
    pub fn clean_file(&self, input: &Path, output: &Path) -> Result<CleanedCorpus> {
        let start = Instant::now();
        info!(input = %input.display(), "Reading CSV file");

        let table = self.parser()?.parse_file(input)?;
        let corpus = self.clean_table(&table)?;

        write_corpus(output, &corpus.records)?;

        let summary = &corpus.summary;
        info!(
            accepted = summary.accepted,
            skipped_empty_source = summary.skipped_empty_source,
            empty_after_clean = summary.empty_after_clean,
            total_chars = summary.total_chars,
            non_empty_lines = summary.non_empty_lines,
            output = %output.display(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Cleaning complete"
        );

        Ok(corpus)
    }

    /// Clean CSV from string content (for testing or in-memory data)
    pub fn clean_content(&self, content: &str) -> Result<CleanedCorpus> {
        let table = self.parser()?.parse_content(content)?;
        self.clean_table(&table)
    }

    /// Resolve columns, then normalize every row in order.
    pub fn clean_table(&self, table: &CsvTable) -> Result<CleanedCorpus> {
        info!(rows = table.len(), columns = ?table.headers, "Found poems");

        let schema = resolve_columns(&table.headers)?;
        info!(column = %schema.body_column, "Using poem column");
        match &schema.title_column {
            Some(title) => info!(column = %title, "Using title column"),
            None => warn!("'Title' column not found. Poems will be saved as Untitled."),
        }

        let records = table.records(&schema)?;
        Ok(Self::clean_records(&records, schema.title_column.is_some()))
    }

    /// Normalize records in source order and aggregate the outcome.
    pub fn clean_records(records: &[RawRecord], has_title_column: bool) -> CleanedCorpus {
        let mut accepted = Vec::new();
        let mut summary = CleaningSummary {
            total_rows: records.len(),
            ..Default::default()
        };

        for record in records {
            match normalize_record(record, has_title_column) {
                RecordOutcome::Accepted(formatted) => accepted.push(formatted),
                RecordOutcome::SkippedEmptySource => summary.skipped_empty_source += 1,
                RecordOutcome::EmptyAfterClean => summary.empty_after_clean += 1,
            }
        }

        summary.accepted = accepted.len();

        let text = accepted.concat();
        summary.total_chars = text.chars().count();
        summary.non_empty_lines = text
            .split('\n')
            .filter(|line| !line.trim_matches(is_text_space).is_empty())
            .count();

        CleanedCorpus {
            records: accepted,
            summary,
        }
    }

    fn parser(&self) -> Result<CsvParser> {
        let delimiter = self.config.delimiter;
        if !delimiter.is_ascii() {
            return Err(AppError::ValidationError(format!(
                "Delimiter must be a single ASCII character, got {:?}",
                delimiter
            )));
        }
        Ok(CsvParser::new().with_delimiter(delimiter as u8))
    }
}

impl Default for CorpusCleaner {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POEMS_CSV: &str = "\
Id,Title,Poem,Poet
0,  The\tRaven ,\"Once upon a midnight dreary,\r\nwhile I pondered\",Poe
1,Blank,,Nobody
2,Notes,\"/* Lines 1-9 omitted */\",Editor
3,,\"\"\"Hope is the thing\nwith feathers\"\"\",Dickinson
4,Spaces,\"   \",Nobody
5,Fire and Ice,\"Some say the world will end in fire,\n\n\nSome say in ice.\",Frost
";

    #[test]
    fn test_counts_sum_to_total_rows() {
        let corpus = CorpusCleaner::default().clean_content(POEMS_CSV).unwrap();
        let summary = &corpus.summary;

        assert_eq!(summary.total_rows, 6);
        assert_eq!(summary.accepted, 3);
        assert_eq!(summary.skipped_empty_source, 2);
        assert_eq!(summary.empty_after_clean, 1);
        assert!(summary.is_balanced());
    }

    #[test]
    fn test_records_keep_source_order() {
        let corpus = CorpusCleaner::default().clean_content(POEMS_CSV).unwrap();

        assert_eq!(
            corpus.records,
            vec![
                "title: The Raven\npoem: Once upon a midnight dreary,\nwhile I pondered\n\n\n",
                "title: Untitled\npoem: Hope is the thing\nwith feathers\n\n\n",
                "title: Fire and Ice\npoem: Some say the world will end in fire,\n\nSome say in ice.\n\n\n",
            ]
        );
    }

    #[test]
    fn test_summary_text_statistics() {
        let corpus = CorpusCleaner::default().clean_content(POEMS_CSV).unwrap();
        let text = corpus.text();

        assert_eq!(corpus.summary.total_chars, text.chars().count());
        assert_eq!(corpus.summary.non_empty_lines, 9);
        assert_eq!(corpus.preview(12), "title: The R");
    }

    #[test]
    fn test_lowercase_columns_without_title() {
        let corpus = CorpusCleaner::default()
            .clean_content("poem\nfirst verse\nsecond verse\n")
            .unwrap();

        assert_eq!(
            corpus.text(),
            "title: Untitled\npoem: first verse\n\n\ntitle: Untitled\npoem: second verse\n\n\n"
        );
    }

    #[test]
    fn test_null_marker_cells() {
        let corpus = CorpusCleaner::default()
            .clean_content("Title,Poem\nFirst,None\nNA,a verse\n")
            .unwrap();

        assert_eq!(corpus.summary.skipped_empty_source, 1);
        assert_eq!(corpus.text(), "title: Untitled\npoem: a verse\n\n\n");
    }

    #[test]
    fn test_missing_poem_column_is_fatal() {
        let err = CorpusCleaner::default()
            .clean_content("Title,Text\nA,b\n")
            .unwrap_err();
        assert!(matches!(err, AppError::MissingColumn(_)));
    }

    #[test]
    fn test_clean_file_writes_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("PoetryFoundationData.csv");
        let output = dir.path().join("out").join("cleaned_poems.txt");
        std::fs::write(&input, POEMS_CSV).unwrap();

        let corpus = CorpusCleaner::default().clean_file(&input, &output).unwrap();

        assert_eq!(std::fs::read_to_string(&output).unwrap(), corpus.text());
        assert_eq!(corpus.summary.accepted, 3);
    }

    #[test]
    fn test_clean_file_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("cleaned_poems.txt");

        let result = CorpusCleaner::default().clean_file(&dir.path().join("missing.csv"), &output);

        assert!(result.is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let cleaner = CorpusCleaner::new(CleaningConfig {
            delimiter: '§',
            ..Default::default()
        });
        assert!(matches!(
            cleaner.clean_content("poem\nx\n"),
            Err(AppError::ValidationError(_))
        ));
    }
}
