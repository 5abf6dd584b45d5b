//! Command-line surface: `poemforge clean | prepare | evaluate`.

mod clean_command;
mod evaluate_command;
mod prepare_command;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::error::Result;
use crate::domain::pipeline_config::PipelineConfig;

pub use clean_command::CleanArgs;
pub use evaluate_command::EvaluateArgs;
pub use prepare_command::PrepareArgs;

/// Prepare a poem corpus for language-model training and score generated text.
#[derive(Parser, Debug, Clone)]
#[command(name = "poemforge", version, about, long_about = None)]
pub struct Cli {
    /// TOML config file (default: ./poemforge.toml when present)
    #[arg(global = true, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Clean the raw poem CSV into a training corpus
    Clean(CleanArgs),
    /// Encode the corpus and write train/validation token arrays
    Prepare(PrepareArgs),
    /// Score generated text against reference text
    Evaluate(EvaluateArgs),
}

impl Commands {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut PipelineConfig) {
        match self {
            Commands::Clean(args) => args.apply_overrides(config),
            Commands::Prepare(args) => args.apply_overrides(config),
            Commands::Evaluate(args) => args.apply_overrides(config),
        }
    }

    pub fn execute(&self, config: &PipelineConfig) -> Result<()> {
        match self {
            Commands::Clean(args) => clean_command::execute(args, config),
            Commands::Prepare(args) => prepare_command::execute(args, config),
            Commands::Evaluate(args) => evaluate_command::execute(args, config),
        }
    }
}

/// `1234567` → `1,234,567`
pub(crate) fn format_count(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
