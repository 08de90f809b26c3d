//! Configuration loading and validation.
//!
//! Uses serde_yaml to load YAML configuration files, with an environment
//! variable override for the template path.

mod app;
mod error;
mod template;

pub use app::AppConfig;
pub use error::ConfigError;
pub use template::TemplateConfig;

use serde::Deserialize;
use std::{env, fs, path::Path};
use tracing::debug;

/// Environment variable overriding `template.path`.
pub const TEMPLATE_PATH_ENV: &str = "AGE_BRACKETS_TEMPLATE";

/// Root configuration structure.
///
/// Both sections are optional in the file and fall back to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Application-level settings like name and log level.
    #[serde(default)]
    pub app: AppConfig,
    /// Where the template lives and how it is read.
    #[serde(default)]
    pub template: TemplateConfig,
}

impl Config {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Loads a `.env` file first (if present), then the YAML, then applies
    /// `AGE_BRACKETS_TEMPLATE` on top.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore error if not found)
        dotenvy::dotenv().ok();

        let content = fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&content)?;

        config.apply_env();
        config.validate()?;

        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &str) -> Result<Self, ConfigError> {
        if Path::new(path).exists() {
            return Self::load(path);
        }

        debug!(path = %path, "Config file not found, using defaults");
        dotenvy::dotenv().ok();

        let mut config = Config::default();
        config.apply_env();
        config.validate()?;

        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(path) = env::var(TEMPLATE_PATH_ENV) {
            if !path.trim().is_empty() {
                self.template.path = path;
            }
        }
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.app.name.is_empty() {
            return Err(ConfigError::Validation("app.name is required".into()));
        }

        if self.template.path.trim().is_empty() {
            return Err(ConfigError::Validation("template.path is required".into()));
        }

        if let Some(level) = self.app.log_level.as_deref() {
            if !matches!(level, "trace" | "debug" | "info" | "warn" | "warning" | "error") {
                return Err(ConfigError::Validation(format!(
                    "app.log_level: unknown level {}",
                    level
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
