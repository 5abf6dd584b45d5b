pub mod gpt2;

use crate::domain::error::Result;

pub use gpt2::Gpt2Encoder;

/// Subword encoder used to turn the cleaned corpus into token ids.
pub trait TokenEncoder {
    /// Encode text without interpreting special tokens.
    fn encode_ordinary(&self, text: &str) -> Result<Vec<u32>>;

    /// Short identifier, used in logs
    fn name(&self) -> &str;
}
