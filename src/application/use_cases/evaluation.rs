// ============================================================
// EVALUATION USE CASE
// ============================================================
// Score generated text against reference text

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::corpus_statistics::{trigram_precision, trigram_repetition, RepetitionScores};
use crate::domain::error::{AppError, Result};
use crate::infrastructure::storage::read_joined;

/// Scores for one evaluation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// N-gram span used
    pub n: usize,

    /// Clipped precision of generated against reference
    pub precision: f64,

    /// Self-repetition of generated
    pub repetition: RepetitionScores,
}

/// Score `generated` against `reference` with span `n`.
pub fn evaluate_texts(generated: &str, reference: &str, n: usize) -> EvaluationReport {
    EvaluationReport {
        n,
        precision: trigram_precision(generated, reference, n),
        repetition: trigram_repetition(generated, n),
    }
}

/// Read both file groups (each joined with `"\n"`) and score them.
pub fn evaluate_files<P: AsRef<Path>>(
    reference_paths: &[P],
    generated_paths: &[P],
    n: usize,
) -> Result<EvaluationReport> {
    if reference_paths.is_empty() || generated_paths.is_empty() {
        return Err(AppError::ValidationError(
            "At least one reference and one generated file are required".to_string(),
        ));
    }
    if n == 0 {
        return Err(AppError::ValidationError("n must be >= 1".to_string()));
    }

    let reference = read_joined(reference_paths)?;
    let generated = read_joined(generated_paths)?;
    debug!(
        reference_chars = reference.chars().count(),
        generated_chars = generated.chars().count(),
        n,
        "Loaded evaluation texts"
    );

    Ok(evaluate_texts(&generated, &reference, n))
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "n={}", self.n)?;
        writeln!(f, "Trigram precision (specific): {:.6}", self.precision)?;
        writeln!(
            f,
            "Trigram repetition share (general): {:.6}",
            self.repetition.share
        )?;
        write!(
            f,
            "Trigram repetition unique (general): {:.6}",
            self.repetition.unique
        )
    }
}
