use tiktoken_rs::{r50k_base, CoreBPE};

use super::TokenEncoder;
use crate::domain::error::{AppError, Result};

/// GPT-2 byte-pair encoding (`r50k_base`). Every id fits in `u16`.
pub struct Gpt2Encoder {
    bpe: CoreBPE,
}

impl Gpt2Encoder {
    pub fn new() -> Result<Self> {
        let bpe = r50k_base()
            .map_err(|e| AppError::TokenizerError(format!("Failed to load r50k_base: {}", e)))?;
        Ok(Self { bpe })
    }
}

impl TokenEncoder for Gpt2Encoder {
    fn encode_ordinary(&self, text: &str) -> Result<Vec<u32>> {
        Ok(self
            .bpe
            .encode_ordinary(text)
            .into_iter()
            .map(|token| token as u32)
            .collect())
    }

    fn name(&self) -> &str {
        "gpt2"
    }
}
