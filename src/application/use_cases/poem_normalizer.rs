// ============================================================
// POEM NORMALIZER
// ============================================================
// Turn one raw poem row into a canonical training record

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

use crate::domain::poem::{coerce_to_text, is_text_space, CellValue, RawRecord, UNTITLED};

static BLOCK_COMMENT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

static LEADING_QUOTES_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^"+[\s\x1c-\x1f]*"#).unwrap());

// A trailing quote run may sit before one final newline.
static TRAILING_QUOTES_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\s\x1c-\x1f]*"+(\n?)\z"#).unwrap());

static NEWLINE_RUN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

// `\s` plus the information separators, which also count as spacing here.
static WHITESPACE_RUN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\x1c-\x1f]+").unwrap());

/// One rewrite step of the body cleaning pipeline.
pub type BodyTransform = fn(&str) -> String;

/// Body cleaning steps, applied in this exact order. Several steps interact
/// (the blank-line collapse only sees what comment removal left behind), so
/// the order is part of the output format.
pub const BODY_TRANSFORMS: [(&str, BodyTransform); 9] = [
    ("normalize_line_endings", normalize_line_endings),
    ("normalize_unicode", normalize_unicode),
    ("strip_block_comments", strip_block_comments),
    ("strip_quote_artifacts", strip_quote_artifacts),
    ("trim_text", trim_text),
    ("drop_comment_lines", drop_comment_lines),
    ("collapse_blank_lines", collapse_blank_lines),
    ("remove_control_chars", remove_control_chars),
    ("trim_line_ends", trim_line_ends),
];

/// What the normalizer decided for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Formatted record ready for the corpus
    Accepted(String),

    /// Body was null or whitespace in the source
    SkippedEmptySource,

    /// Body had content but nothing survived cleaning
    EmptyAfterClean,
}

/// Normalize one row.
///
/// `has_title_column` is false when the source has no title column at all,
/// in which case every record is titled [`UNTITLED`].
pub fn normalize_record(record: &RawRecord, has_title_column: bool) -> RecordOutcome {
    if record.body.is_blank() {
        return RecordOutcome::SkippedEmptySource;
    }

    let poem = clean_body(&record.body);
    if poem.trim_matches(is_text_space).is_empty() {
        return RecordOutcome::EmptyAfterClean;
    }

    let title = if has_title_column {
        clean_title(&record.title)
    } else {
        UNTITLED.to_string()
    };

    let formatted = format_record(&title, &poem);
    if formatted.is_empty() {
        RecordOutcome::EmptyAfterClean
    } else {
        RecordOutcome::Accepted(formatted)
    }
}

/// Clean a poem body cell. Never fails; unusable input cleans to `""`.
pub fn clean_body(value: &CellValue) -> String {
    clean_body_text(&coerce_to_text(value))
}

/// Run every step of [`BODY_TRANSFORMS`] over `text`.
pub fn clean_body_text(text: &str) -> String {
    BODY_TRANSFORMS
        .iter()
        .fold(text.to_string(), |current, (_, transform)| transform(&current))
}

/// Clean a title cell. Null, NaN and blank titles become [`UNTITLED`].
pub fn clean_title(value: &CellValue) -> String {
    if value.is_null() {
        return UNTITLED.to_string();
    }

    let normalized: String = coerce_to_text(value).nfkc().collect();
    let collapsed =
        WHITESPACE_RUN_PATTERN.replace_all(normalized.trim_matches(is_text_space), " ");

    if collapsed.is_empty() {
        UNTITLED.to_string()
    } else {
        collapsed.into_owned()
    }
}

/// Render the training record, or `""` when the poem is blank.
pub fn format_record(title: &str, poem: &str) -> String {
    let poem = poem.trim_matches(is_text_space);
    if poem.is_empty() {
        return String::new();
    }

    format!("title: {}\npoem: {}\n\n\n", title, poem)
}

/// `\r\n` and lone `\r` become `\n`.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Unicode compatibility composition (NFKC).
pub fn normalize_unicode(text: &str) -> String {
    text.nfkc().collect()
}

/// Drop editorial `/* ... */` placeholders, including multi-line ones.
pub fn strip_block_comments(text: &str) -> String {
    BLOCK_COMMENT_PATTERN.replace_all(text, "").into_owned()
}

/// Drop quote runs left at the edges of the text by CSV quoting.
pub fn strip_quote_artifacts(text: &str) -> String {
    let text = LEADING_QUOTES_PATTERN.replace(text, "");
    TRAILING_QUOTES_PATTERN.replace(&text, "${1}").into_owned()
}

/// Strip whitespace from both ends of the whole text.
pub fn trim_text(text: &str) -> String {
    text.trim_matches(is_text_space).to_string()
}

/// Right-trim every line and drop `//` comment lines.
pub fn drop_comment_lines(text: &str) -> String {
    text.split('\n')
        .map(|line| line.trim_end_matches(is_text_space))
        .filter(|line| !line.trim_start_matches(is_text_space).starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Two ordered passes: every `\n\n` becomes `\n`, then any run of three or
/// more newlines becomes `\n\n`.
///
/// A run of k newlines therefore maps to 1 newline for k <= 2 and to 2
/// newlines for k >= 3. A single blank line between stanzas is removed, two
/// or more collapse to one.
pub fn collapse_blank_lines(text: &str) -> String {
    let halved = text.replace("\n\n", "\n");
    NEWLINE_RUN_PATTERN.replace_all(&halved, "\n\n").into_owned()
}

/// Remove code points of general category `C*` except tab and newline.
pub fn remove_control_chars(text: &str) -> String {
    text.chars()
        .filter(|&ch| {
            ch == '\n' || ch == '\t' || ch.general_category_group() != GeneralCategoryGroup::Other
        })
        .collect()
}

/// Right-trim every line.
pub fn trim_line_ends(text: &str) -> String {
    text.split('\n')
        .map(|line| line.trim_end_matches(is_text_space))
        .collect::<Vec<_>>()
        .join("\n")
}
