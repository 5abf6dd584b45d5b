// ============================================================
// POEM DOMAIN LAYER
// ============================================================
// Core types and value objects for poem corpus preparation
// No I/O, no external collaborators

mod cell_value;
mod cleaning_summary;
mod column_schema;
mod raw_record;

pub use cell_value::{coerce_to_text, is_text_space, CellValue, NULL_MARKERS};
pub use cleaning_summary::{CleanedCorpus, CleaningSummary};
pub use column_schema::{resolve_columns, ColumnSchema};
pub use raw_record::RawRecord;

/// Title used whenever a record has no usable title.
pub const UNTITLED: &str = "Untitled";
