use std::path::PathBuf;

use clap::Args;

use super::format_count;
use crate::application::DatasetPreparer;
use crate::domain::error::{AppError, Result};
use crate::domain::pipeline_config::PipelineConfig;
use crate::infrastructure::tokenizer::Gpt2Encoder;

#[derive(Args, Debug, Clone)]
pub struct PrepareArgs {
    /// Cleaned corpus produced by `clean`
    #[arg(long, default_value = "cleaned_poems.txt")]
    pub input: PathBuf,

    /// Directory receiving train.bin and val.bin
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Maximum tokens to use (e.g. 50000); all tokens when omitted
    #[arg(long)]
    pub max_tokens: Option<usize>,

    /// Train/validation split ratio (e.g. 0.9 for 90/10)
    #[arg(long)]
    pub train_split: Option<f64>,
}

impl PrepareArgs {
    pub fn apply_overrides(&self, config: &mut PipelineConfig) {
        if self.max_tokens.is_some() {
            config.dataset.max_tokens = self.max_tokens;
        }
        if let Some(train_split) = self.train_split {
            config.dataset.train_split = train_split;
        }
    }
}

pub fn execute(args: &PrepareArgs, config: &PipelineConfig) -> Result<()> {
    if !args.input.exists() {
        return Err(AppError::IoError(format!(
            "{} not found. Run `poemforge clean` first",
            args.input.display()
        )));
    }

    let preparer = DatasetPreparer::new(Gpt2Encoder::new()?, config.dataset.clone());
    let split = preparer.prepare_file(&args.input, &args.out_dir)?;

    let train_pct = config.dataset.train_split * 100.0;
    println!("Total tokens available: {}", format_count(split.available_tokens));
    println!("Tokens to use: {}", format_count(split.used_tokens));
    println!("\nSplit configuration:");
    println!("  Train/Eval ratio: {:.0}/{:.0}", train_pct, 100.0 - train_pct);
    println!("  Train tokens: {}", format_count(split.train.len()));
    println!("  Val tokens: {}", format_count(split.validation.len()));
    println!("\n✓ Data preparation complete!");
    println!("  Saved train.bin and val.bin to {}", args.out_dir.display());

    Ok(())
}
