// ============================================================
// COLUMN SCHEMA
// ============================================================
// Resolve which source columns carry the poem body and title

use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};

const BODY_COLUMNS: [&str; 2] = ["Poem", "poem"];
const TITLE_COLUMNS: [&str; 2] = ["Title", "title"];

/// Columns the cleaning driver reads from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Header of the poem body column
    pub body_column: String,

    /// Header of the title column, if the source has one
    pub title_column: Option<String>,
}

/// Pick the body and title columns from the header row.
///
/// The capitalized variant wins when both are present. A missing body column
/// is fatal; a missing title column is not.
pub fn resolve_columns<S: AsRef<str>>(headers: &[S]) -> Result<ColumnSchema> {
    let find = |candidates: &[&str]| {
        candidates
            .iter()
            .find(|candidate| headers.iter().any(|h| h.as_ref() == **candidate))
            .map(|found| found.to_string())
    };

    let body_column = find(&BODY_COLUMNS).ok_or_else(|| {
        let available: Vec<&str> = headers.iter().map(|h| h.as_ref()).collect();
        AppError::MissingColumn(format!(
            "'Poem' column not found (available columns: {:?})",
            available
        ))
    })?;

    Ok(ColumnSchema {
        body_column,
        title_column: find(&TITLE_COLUMNS),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_capitalized_columns() {
        let schema = resolve_columns(&["Id", "Title", "Poem", "Poet"]).unwrap();
        assert_eq!(schema.body_column, "Poem");
        assert_eq!(schema.title_column.as_deref(), Some("Title"));
    }

    #[test]
    fn test_resolve_lowercase_columns() {
        let schema = resolve_columns(&["title", "poem"]).unwrap();
        assert_eq!(schema.body_column, "poem");
        assert_eq!(schema.title_column.as_deref(), Some("title"));
    }

    #[test]
    fn test_capitalized_variant_wins() {
        let schema = resolve_columns(&["poem", "Poem"]).unwrap();
        assert_eq!(schema.body_column, "Poem");
    }

    #[test]
    fn test_title_is_optional() {
        let schema = resolve_columns(&["Poem"]).unwrap();
        assert_eq!(schema.title_column, None);
    }

    #[test]
    fn test_missing_body_column_fails() {
        let err = resolve_columns(&["Title", "POEM", "text"]).unwrap_err();
        assert!(matches!(err, AppError::MissingColumn(_)));
    }
}
