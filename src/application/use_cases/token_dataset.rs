// ============================================================
// TOKEN DATASET USE CASE
// ============================================================
// Encode the cleaned corpus and write train/validation token arrays

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::error::{AppError, Result};
use crate::domain::pipeline_config::DatasetConfig;
use crate::infrastructure::storage::{token_file_paths, write_token_file};
use crate::infrastructure::tokenizer::TokenEncoder;

/// Token ids split at `floor(len * train_split)`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSplit {
    pub train: Vec<u16>,
    pub validation: Vec<u16>,

    /// Tokens produced by the encoder, before the cap
    pub available_tokens: usize,

    /// Tokens kept after the cap
    pub used_tokens: usize,
}

/// Dataset preparation use case
pub struct DatasetPreparer<E: TokenEncoder> {
    encoder: E,
    config: DatasetConfig,
}

impl<E: TokenEncoder> DatasetPreparer<E> {
    pub fn new(encoder: E, config: DatasetConfig) -> Self {
        Self { encoder, config }
    }

    /// Encode and split in memory.
    pub fn prepare(&self, text: &str) -> Result<TokenSplit> {
        validate_split(self.config.train_split)?;

        let tokens = self.encoder.encode_ordinary(text)?;
        info!(
            encoder = self.encoder.name(),
            chars = text.chars().count(),
            tokens = tokens.len(),
            "Encoded corpus"
        );

        split_tokens(tokens, self.config.max_tokens, self.config.train_split)
    }

    /// Read the corpus file, encode it and write `train.bin` / `val.bin`
    /// into `out_dir`.
    pub fn prepare_file(&self, corpus_path: &Path, out_dir: &Path) -> Result<TokenSplit> {
        let text = std::fs::read_to_string(corpus_path).map_err(|e| {
            AppError::IoError(format!(
                "Failed to read corpus {}: {}",
                corpus_path.display(),
                e
            ))
        })?;

        let split = self.prepare(&text)?;

        let (train_path, validation_path) = token_file_paths(out_dir);
        write_token_file(&train_path, &split.train)?;
        write_token_file(&validation_path, &split.validation)?;

        info!(
            train_tokens = split.train.len(),
            val_tokens = split.validation.len(),
            train = %train_path.display(),
            val = %validation_path.display(),
            "Data preparation complete"
        );

        Ok(split)
    }
}

/// Cap the token stream, then split it into train and validation parts.
pub fn split_tokens(
    mut tokens: Vec<u32>,
    max_tokens: Option<usize>,
    train_split: f64,
) -> Result<TokenSplit> {
    validate_split(train_split)?;

    let available_tokens = tokens.len();
    if let Some(limit) = max_tokens {
        if tokens.len() > limit {
            tokens.truncate(limit);
            info!(limit, "Limited token count");
        }
    }

    let ids = tokens
        .into_iter()
        .map(|token| {
            u16::try_from(token).map_err(|_| {
                AppError::ValidationError(format!("Token id {} does not fit in u16", token))
            })
        })
        .collect::<Result<Vec<u16>>>()?;

    let used_tokens = ids.len();
    let split_idx = (used_tokens as f64 * train_split) as usize;
    let mut train = ids;
    let validation = train.split_off(split_idx);

    Ok(TokenSplit {
        train,
        validation,
        available_tokens,
        used_tokens,
    })
}

fn validate_split(train_split: f64) -> Result<()> {
    if train_split > 0.0 && train_split < 1.0 {
        Ok(())
    } else {
        Err(AppError::ValidationError(format!(
            "train_split must be between 0 and 1, got {}",
            train_split
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One token per character, id = code point.
    struct CharEncoder;

    impl TokenEncoder for CharEncoder {
        fn encode_ordinary(&self, text: &str) -> Result<Vec<u32>> {
            Ok(text.chars().map(|ch| ch as u32).collect())
        }

        fn name(&self) -> &str {
            "chars"
        }
    }

    fn config(train_split: f64, max_tokens: Option<usize>) -> DatasetConfig {
        DatasetConfig {
            train_split,
            max_tokens,
        }
    }

    #[test]
    fn test_split_at_floor_of_fraction() {
        let split = split_tokens((0..10).collect(), None, 0.9).unwrap();
        assert_eq!(split.train, (0..9).collect::<Vec<u16>>());
        assert_eq!(split.validation, vec![9]);

        let split = split_tokens((0..7).collect(), None, 0.5).unwrap();
        assert_eq!(split.train.len(), 3);
        assert_eq!(split.validation.len(), 4);
    }

    #[test]
    fn test_cap_applies_before_split() {
        let split = split_tokens((0..100).collect(), Some(20), 0.75).unwrap();
        assert_eq!(split.available_tokens, 100);
        assert_eq!(split.used_tokens, 20);
        assert_eq!(split.train.len(), 15);
        assert_eq!(split.validation, (15..20).collect::<Vec<u16>>());
    }

    #[test]
    fn test_cap_larger_than_stream_is_noop() {
        let split = split_tokens(vec![1, 2, 3], Some(10), 0.9).unwrap();
        assert_eq!(split.used_tokens, 3);
    }

    #[test]
    fn test_split_bounds_rejected() {
        for bad in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            assert!(matches!(
                split_tokens(vec![1], None, bad),
                Err(AppError::ValidationError(_))
            ));
        }
    }

    #[test]
    fn test_oversized_token_id_rejected() {
        let err = split_tokens(vec![70_000], None, 0.5).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn test_prepare_file_writes_arrays() {
        let dir = tempfile::tempdir().unwrap();
        let corpus = dir.path().join("cleaned_poems.txt");
        std::fs::write(&corpus, "abcdefghij").unwrap();

        let preparer = DatasetPreparer::new(CharEncoder, config(0.8, None));
        let split = preparer.prepare_file(&corpus, dir.path()).unwrap();

        assert_eq!(split.train.len(), 8);
        let (train_path, val_path) = token_file_paths(dir.path());
        assert_eq!(std::fs::read(train_path).unwrap().len(), 16);
        assert_eq!(std::fs::read(val_path).unwrap(), vec![b'i', 0, b'j', 0]);
    }

    #[test]
    fn test_prepare_missing_corpus_fails() {
        let dir = tempfile::tempdir().unwrap();
        let preparer = DatasetPreparer::new(CharEncoder, config(0.9, None));
        let result = preparer.prepare_file(&dir.path().join("missing.txt"), dir.path());
        assert!(matches!(result, Err(AppError::IoError(_))));
    }
}
