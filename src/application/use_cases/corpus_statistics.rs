//! Character n-gram statistics for generated text.
//!
//! Windows are taken over Unicode scalar values, never bytes or words: a
//! "trigram" is three consecutive characters.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default n-gram span.
pub const DEFAULT_SPAN: usize = 3;

/// Self-repetition of a text's n-gram windows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RepetitionScores {
    /// Windows that are extra copies of an earlier window, over all windows
    pub share: f64,

    /// Distinct windows occurring more than once, over all windows
    pub unique: f64,
}

/// Overlapping windows of `n` characters, left to right.
///
/// Returns `len - n + 1` windows when the text has at least `n` characters,
/// otherwise nothing. A span of zero yields nothing.
pub fn ngrams(text: &str, n: usize) -> Vec<&str> {
    if n == 0 {
        return Vec::new();
    }

    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_count = bounds.len() - 1;
    if char_count < n {
        return Vec::new();
    }

    (0..=char_count - n)
        .map(|start| &text[bounds[start]..bounds[start + n]])
        .collect()
}

/// Multiset of the windows returned by [`ngrams`].
pub fn ngram_counts(text: &str, n: usize) -> HashMap<&str, usize> {
    count_windows(&ngrams(text, n))
}

fn count_windows<'a>(windows: &[&'a str]) -> HashMap<&'a str, usize> {
    let mut counts = HashMap::new();
    for window in windows {
        *counts.entry(*window).or_insert(0) += 1;
    }
    counts
}

/// Clipped n-gram precision of `generated` against `reference`.
///
/// Each distinct window of `generated` earns at most as many matches as it
/// has occurrences in `reference`. The clipped total is divided by the number
/// of windows (not types) in `generated`.
pub fn trigram_precision(generated: &str, reference: &str, n: usize) -> f64 {
    let windows = ngrams(generated, n);
    if windows.is_empty() {
        return 0.0;
    }

    let generated_counts = count_windows(&windows);
    let reference_counts = ngram_counts(reference, n);

    let matched: usize = generated_counts
        .iter()
        .map(|(window, count)| (*count).min(reference_counts.get(window).copied().unwrap_or(0)))
        .sum();

    matched as f64 / windows.len() as f64
}

/// Self-repetition of `generated`. Both scores are zero when the text has
/// fewer than `n` characters.
pub fn trigram_repetition(generated: &str, n: usize) -> RepetitionScores {
    let windows = ngrams(generated, n);
    if windows.is_empty() {
        return RepetitionScores::default();
    }

    let counts = count_windows(&windows);
    let total = windows.len() as f64;

    let extra_copies: usize = counts.values().map(|count| count.saturating_sub(1)).sum();
    let repeated_types = counts.values().filter(|count| **count > 1).count();

    RepetitionScores {
        share: extra_copies as f64 / total,
        unique: repeated_types as f64 / total,
    }
}
