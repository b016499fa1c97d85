use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use thiserror::Error;

use crate::domain::models::config::Config;
use crate::infrastructure::logging::RotationPolicy;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Dashboard url cannot be empty")]
    EmptyDashboardUrl,

    #[error("Dashboard project cannot be empty; set dashboard.project or pass --project")]
    EmptyProject,

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("Invalid limit_rows: {0}. Must be at least 1")]
    InvalidLimitRows(usize),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidLogRotation(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .cdash-verify/config.yaml (project config)
    /// 3. .cdash-verify/local.yaml (local overrides, optional)
    /// 4. Environment variables (CDASH_VERIFY_* prefix, highest priority)
    ///
    /// The project name is not checked here because it is commonly supplied
    /// on the command line; call [`ConfigLoader::validate`] once all
    /// overrides are applied.
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".cdash-verify/config.yaml"))
            .merge(Yaml::file(".cdash-verify/local.yaml"))
            .merge(Env::prefixed("CDASH_VERIFY_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate_settings(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honouring env overrides
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("CDASH_VERIFY_").split("__"))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate_settings(&config)?;
        Ok(config)
    }

    /// Full validation, including the dashboard project
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        Self::validate_settings(config)?;
        if config.dashboard.project.trim().is_empty() {
            return Err(ConfigError::EmptyProject);
        }
        Ok(())
    }

    /// Validate everything that cannot come from the command line
    pub fn validate_settings(config: &Config) -> Result<(), ConfigError> {
        if config.dashboard.url.trim().is_empty() {
            return Err(ConfigError::EmptyDashboardUrl);
        }

        if config.dashboard.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.dashboard.timeout_secs));
        }

        if config.report.limit_rows == 0 {
            return Err(ConfigError::InvalidLimitRows(config.report.limit_rows));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        if RotationPolicy::from_name(&config.logging.rotation).is_none() {
            return Err(ConfigError::InvalidLogRotation(config.logging.rotation.clone()));
        }

        Ok(())
    }
}
