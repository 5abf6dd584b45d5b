// ============================================================
// PIPELINE CONFIGURATION
// ============================================================
// Configuration values for cleaning, dataset preparation and evaluation

use serde::{Deserialize, Serialize};

/// Settings for the cleaning driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningConfig {
    /// Field delimiter of the source table (default: ',')
    pub delimiter: char,

    /// Characters of the corpus shown after a run (default: 800)
    pub preview_chars: usize,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            preview_chars: 800,
        }
    }
}

/// Settings for token dataset preparation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Fraction of tokens that go to the training split (default: 0.9)
    pub train_split: f64,

    /// Cap on the number of tokens used, `None` keeps everything
    pub max_tokens: Option<usize>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            train_split: 0.9,
            max_tokens: None,
        }
    }
}

/// Settings for generated-text evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Character n-gram span (default: 3)
    pub ngram_span: usize,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self { ngram_span: 3 }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub cleaning: CleaningConfig,
    pub dataset: DatasetConfig,
    pub evaluation: EvaluationConfig,

    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            cleaning: CleaningConfig::default(),
            dataset: DatasetConfig::default(),
            evaluation: EvaluationConfig::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if !self.cleaning.delimiter.is_ascii() {
            return Err("cleaning.delimiter must be a single ASCII character".to_string());
        }
        if !(self.dataset.train_split > 0.0 && self.dataset.train_split < 1.0) {
            return Err(format!(
                "dataset.train_split must be between 0 and 1, got {}",
                self.dataset.train_split
            ));
        }
        if self.dataset.max_tokens == Some(0) {
            return Err("dataset.max_tokens must be > 0 when set".to_string());
        }
        if self.evaluation.ngram_span == 0 {
            return Err("evaluation.ngram_span must be >= 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cleaning.preview_chars, 800);
        assert_eq!(config.dataset.train_split, 0.9);
        assert_eq!(config.evaluation.ngram_span, 3);
    }

    #[test]
    fn test_rejects_split_bounds() {
        let mut config = PipelineConfig::default();
        config.dataset.train_split = 1.0;
        assert!(config.validate().is_err());
        config.dataset.train_split = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_span_and_cap() {
        let mut config = PipelineConfig::default();
        config.evaluation.ngram_span = 0;
        assert!(config.validate().is_err());

        let mut config = PipelineConfig::default();
        config.dataset.max_tokens = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_non_ascii_delimiter() {
        let mut config = PipelineConfig::default();
        config.cleaning.delimiter = '§';
        assert!(config.validate().is_err());
    }
}
