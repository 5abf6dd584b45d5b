use std::path::PathBuf;

use clap::Args;

use crate::application::use_cases::evaluation::evaluate_files;
use crate::domain::error::{AppError, Result};
use crate::domain::pipeline_config::PipelineConfig;

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    /// Reference text files, joined with newlines
    #[arg(long = "ref", num_args = 1.., required = true)]
    pub references: Vec<PathBuf>,

    /// Generated text files, joined with newlines
    #[arg(long = "gen", num_args = 1.., required = true)]
    pub generated: Vec<PathBuf>,

    /// Character n-gram span (default: 3)
    #[arg(long)]
    pub n: Option<usize>,

    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl EvaluateArgs {
    pub fn apply_overrides(&self, config: &mut PipelineConfig) {
        if let Some(n) = self.n {
            config.evaluation.ngram_span = n;
        }
    }
}

pub fn execute(args: &EvaluateArgs, config: &PipelineConfig) -> Result<()> {
    let report = evaluate_files(
        &args.references,
        &args.generated,
        config.evaluation.ngram_span,
    )?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| AppError::ParseError(format!("Failed to render report: {}", e)))?;
        println!("{}", rendered);
    } else {
        println!("{}", report);
    }

    Ok(())
}
