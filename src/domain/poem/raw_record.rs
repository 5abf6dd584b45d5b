// ============================================================
// RAW RECORD
// ============================================================
// One unvalidated poem row from the tabular source

use serde::{Deserialize, Serialize};

use super::CellValue;

/// A single source row, as read. May be malformed; the normalizer decides
/// what survives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Row index (0-based, header excluded)
    pub index: usize,

    /// Title cell, `Missing` when the source has no title column
    pub title: CellValue,

    /// Poem body cell
    pub body: CellValue,
}

impl RawRecord {
    /// Create a new raw record
    pub fn new(index: usize, title: CellValue, body: CellValue) -> Self {
        Self { index, title, body }
    }

    /// Convenience constructor for in-memory rows
    pub fn from_text(index: usize, title: Option<&str>, body: Option<&str>) -> Self {
        Self::new(index, CellValue::from(title), CellValue::from(body))
    }
}
