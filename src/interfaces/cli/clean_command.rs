use std::path::PathBuf;

use clap::Args;

use super::format_count;
use crate::application::CorpusCleaner;
use crate::domain::error::{AppError, Result};
use crate::domain::pipeline_config::PipelineConfig;

#[derive(Args, Debug, Clone)]
pub struct CleanArgs {
    /// Source CSV with a `Poem`/`poem` column and optional `Title`/`title`
    #[arg(long, default_value = "PoetryFoundationData.csv")]
    pub input: PathBuf,

    /// Corpus text file to write
    #[arg(long, default_value = "cleaned_poems.txt")]
    pub output: PathBuf,

    /// Field delimiter of the CSV
    #[arg(long)]
    pub delimiter: Option<char>,
}

impl CleanArgs {
    pub fn apply_overrides(&self, config: &mut PipelineConfig) {
        if let Some(delimiter) = self.delimiter {
            config.cleaning.delimiter = delimiter;
        }
    }
}

pub fn execute(args: &CleanArgs, config: &PipelineConfig) -> Result<()> {
    if !args.input.exists() {
        return Err(AppError::IoError(format!(
            "{} not found. Place the CSV file at that path or pass --input",
            args.input.display()
        )));
    }

    let cleaner = CorpusCleaner::new(config.cleaning.clone());
    let corpus = cleaner.clean_file(&args.input, &args.output)?;
    let summary = &corpus.summary;

    println!(
        "Processed {} poems (skipped {} empty source rows, {} empty after cleaning)",
        summary.accepted, summary.skipped_empty_source, summary.empty_after_clean
    );
    println!("\n✓ Cleaning complete!");
    println!("  Total characters: {}", format_count(summary.total_chars));
    println!("  Non-empty lines: {}", format_count(summary.non_empty_lines));
    println!("  Saved to: {}", args.output.display());

    println!("\n--- Sample of output ---");
    println!("{}", corpus.preview(config.cleaning.preview_chars));
    println!("...");

    Ok(())
}
