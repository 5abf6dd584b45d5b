use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::domain::error::{AppError, Result};
use crate::domain::pipeline_config::PipelineConfig;
use crate::infrastructure::config::ConfigService;
use crate::interfaces::cli::Cli;

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = ConfigService::new(cli.config.as_deref()).and_then(|service| service.load());
    let log_filter = config
        .as_ref()
        .map(|config| config.log_filter.clone())
        .unwrap_or_else(|_| "info".to_string());
    init_tracing(&log_filter);

    match config.and_then(|config| execute(&cli, config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "poemforge failed");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli, mut config: PipelineConfig) -> Result<()> {
    cli.command.apply_overrides(&mut config);
    config
        .validate()
        .map_err(|e| AppError::ValidationError(format!("Invalid arguments: {}", e)))?;
    cli.command.execute(&config)
}

/// `RUST_LOG` wins over the configured filter. Logs go to stderr so command
/// output on stdout stays clean.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
