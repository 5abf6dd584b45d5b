use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;

use crate::domain::error::{AppError, Result};
use crate::domain::pipeline_config::PipelineConfig;

/// File read when no explicit config path is given. Optional.
pub const DEFAULT_CONFIG_FILE: &str = "poemforge.toml";

/// Environment variable prefix; nested keys use `__`
/// (e.g. `POEMFORGE_DATASET__TRAIN_SPLIT=0.8`).
pub const ENV_PREFIX: &str = "POEMFORGE_";

pub struct ConfigService {
    figment: Figment,
}

impl ConfigService {
    /// Defaults, then the TOML file, then environment variables.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn new(path: Option<&Path>) -> Result<Self> {
        let toml = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::ConfigError(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Toml::file(path)
            }
            None => Toml::file(DEFAULT_CONFIG_FILE),
        };

        let figment = Figment::from(Serialized::defaults(PipelineConfig::default()))
            .merge(toml)
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        Ok(Self { figment })
    }

    pub fn from_figment(figment: Figment) -> Self {
        Self { figment }
    }

    /// Extract and validate the configuration.
    pub fn load(&self) -> Result<PipelineConfig> {
        let config: PipelineConfig = self.figment.extract()?;
        config
            .validate()
            .map_err(|e| AppError::ValidationError(format!("Invalid configuration: {}", e)))?;
        Ok(config)
    }
}
