// ============================================================
// CELL VALUE
// ============================================================
// Lenient representation of one tabular cell

use serde::{Deserialize, Serialize};

/// Cell texts the tabular reader treats as null, besides the empty cell.
pub const NULL_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Whitespace as the cleaning rules see it: Unicode `White_Space` plus the
/// ASCII information separators U+001C..=U+001F.
pub fn is_text_space(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}

/// A single cell as delivered by the tabular reader.
///
/// Tabular sources mix empty cells, text and numbers in the same column, so
/// every consumer goes through [`coerce_to_text`] instead of matching on the
/// variants itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Absent or empty cell
    Missing,

    /// Textual cell, kept verbatim
    Text(String),

    /// Numeric cell; `NaN` is the null sentinel
    Number(f64),
}

impl CellValue {
    /// Build a cell from raw reader text. Empty text and the exact
    /// [`NULL_MARKERS`] are treated as missing.
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() || NULL_MARKERS.contains(&raw) {
            CellValue::Missing
        } else {
            CellValue::Text(raw.to_string())
        }
    }

    /// True for the null markers: `Missing` and `NaN`.
    pub fn is_null(&self) -> bool {
        match self {
            CellValue::Missing => true,
            CellValue::Number(value) => value.is_nan(),
            CellValue::Text(_) => false,
        }
    }

    /// True when the cell is null or only holds whitespace.
    pub fn is_blank(&self) -> bool {
        self.is_null() || coerce_to_text(self).trim_matches(is_text_space).is_empty()
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<Option<&str>> for CellValue {
    fn from(value: Option<&str>) -> Self {
        match value {
            Some(text) => CellValue::Text(text.to_string()),
            None => CellValue::Missing,
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// Total mapping from a cell to text.
///
/// - `Missing` → `""`
/// - `Number(NaN)` → `""`
/// - `Number(x)` → decimal form, integral values keep one fractional digit (`3.0`)
/// - `Text(s)` → `s`
pub fn coerce_to_text(value: &CellValue) -> String {
    match value {
        CellValue::Missing => String::new(),
        CellValue::Number(number) if number.is_nan() => String::new(),
        CellValue::Number(number) => format_number(*number),
        CellValue::Text(text) => text.clone(),
    }
}

fn format_number(number: f64) -> String {
    if number.is_infinite() {
        return if number > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }
    if number.fract() == 0.0 && number.abs() < 1e16 {
        format!("{:.1}", number)
    } else {
        number.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_null_markers_to_empty() {
        assert_eq!(coerce_to_text(&CellValue::Missing), "");
        assert_eq!(coerce_to_text(&CellValue::Number(f64::NAN)), "");
    }

    #[test]
    fn test_coerce_numbers() {
        assert_eq!(coerce_to_text(&CellValue::Number(3.0)), "3.0");
        assert_eq!(coerce_to_text(&CellValue::Number(2.5)), "2.5");
        assert_eq!(coerce_to_text(&CellValue::Number(f64::NEG_INFINITY)), "-inf");
    }

    #[test]
    fn test_coerce_text_is_verbatim() {
        assert_eq!(coerce_to_text(&CellValue::from("  Ode  ")), "  Ode  ");
    }

    #[test]
    fn test_blank_detection() {
        assert!(CellValue::Missing.is_blank());
        assert!(CellValue::Number(f64::NAN).is_blank());
        assert!(CellValue::from(" \n\t ").is_blank());
        assert!(!CellValue::from("word").is_blank());
        assert!(!CellValue::Number(0.0).is_blank());
    }

    #[test]
    fn test_from_raw_treats_empty_as_missing() {
        assert_eq!(CellValue::from_raw(""), CellValue::Missing);
        assert_eq!(CellValue::from_raw(" "), CellValue::Text(" ".to_string()));
    }

    #[test]
    fn test_from_raw_null_markers() {
        assert_eq!(CellValue::from_raw("None"), CellValue::Missing);
        assert_eq!(CellValue::from_raw("NA"), CellValue::Missing);
        assert_eq!(CellValue::from_raw("#N/A"), CellValue::Missing);
        assert_eq!(CellValue::from_raw(" NA"), CellValue::Text(" NA".to_string()));
        assert_eq!(CellValue::from_raw("Nan"), CellValue::Text("Nan".to_string()));
    }

    #[test]
    fn test_information_separators_are_blank() {
        assert!(is_text_space('\u{1c}'));
        assert!(is_text_space('\u{1f}'));
        assert!(!is_text_space('\u{1b}'));
        assert!(CellValue::from("\u{1f}\u{1e}").is_blank());
    }
}
