// ============================================================
// CLEANING SUMMARY
// ============================================================
// Aggregate outcome of one cleaning run

use serde::{Deserialize, Serialize};

/// Per-run counters. `accepted + skipped_empty_source + empty_after_clean`
/// always equals `total_rows`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningSummary {
    /// Rows read from the source
    pub total_rows: usize,

    /// Rows that produced a formatted record
    pub accepted: usize,

    /// Rows whose body was null or whitespace before cleaning
    pub skipped_empty_source: usize,

    /// Rows whose body became empty during cleaning
    pub empty_after_clean: usize,

    /// Characters in the joined corpus
    pub total_chars: usize,

    /// Lines of the joined corpus with visible content
    pub non_empty_lines: usize,
}

impl CleaningSummary {
    /// True when every row is accounted for exactly once.
    pub fn is_balanced(&self) -> bool {
        self.accepted + self.skipped_empty_source + self.empty_after_clean == self.total_rows
    }
}

/// The cleaned corpus, in source-row order, with its summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleanedCorpus {
    /// Accepted formatted records
    pub records: Vec<String>,

    pub summary: CleaningSummary,
}

impl CleanedCorpus {
    /// Concatenation of all records, as written to disk
    pub fn text(&self) -> String {
        self.records.concat()
    }

    /// First `max_chars` characters of the corpus
    pub fn preview(&self, max_chars: usize) -> String {
        self.text().chars().take(max_chars).collect()
    }
}
