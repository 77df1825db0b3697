//! # Configuration Management Module
//!
//! Centralized configuration for the survey pipeline with validation, defaults,
//! and persistence.
//!
//! ## Configuration Structure
//!
//! - [`SurveyConfig`] - Device identity and mission naming
//! - [`LocationConfig`] - Positioning provider and accuracy gating
//! - [`LoggingConfig`] - Logging settings
//!
//! ## Usage
//!
//! ```rust,no_run
//! use netsurvey::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     println!("Device ID: {}", config.survey.device_id);
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [survey]
//! device_id = "358000000000000"
//! mission_id_prefix = "NS "
//!
//! [location]
//! provider = "gps"
//! accuracy_threshold_meters = 32.0
//!
//! [logging]
//! level = "info"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("survey.device_id cannot be empty")]
    EmptyDeviceId,

    #[error("location.provider cannot be empty")]
    EmptyProvider,

    #[error("location.accuracy_threshold_meters must be positive (got {0})")]
    InvalidAccuracyThreshold(f32),

    #[error("unknown logging.level '{0}' (expected error, warn, info, debug, or trace)")]
    InvalidLogLevel(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub survey: SurveyConfig,
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Device identity and mission naming.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyConfig {
    /// Stable per-install device identifier; embedded in every record and in
    /// the generated mission id.
    pub device_id: String,
    /// Prefix for generated mission ids.
    #[serde(default = "default_mission_id_prefix")]
    pub mission_id_prefix: String,
}

/// Positioning provider and accuracy gating for the location cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// The primary positioning provider; fixes from any other provider are ignored.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// A fix is cached only when its reported accuracy is within this radius.
    #[serde(default = "default_accuracy_threshold")]
    pub accuracy_threshold_meters: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_mission_id_prefix() -> String {
    "NS ".to_string()
}

fn default_provider() -> String {
    "gps".to_string()
}

fn default_accuracy_threshold() -> f32 {
    32.0
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LocationConfig {
    fn default() -> Self {
        LocationConfig {
            provider: default_provider(),
            accuracy_threshold_meters: default_accuracy_threshold(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            survey: SurveyConfig {
                device_id: "unknown-device".to_string(),
                mission_id_prefix: default_mission_id_prefix(),
            },
            location: LocationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file and validate it.
    pub async fn load(path: &str) -> Result<Config> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {path}"))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {path}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize this configuration back to a TOML file.
    pub async fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write config file: {path}"))?;
        Ok(())
    }

    /// Write a starter configuration file with default values.
    pub async fn create_default(path: &str) -> Result<()> {
        Config::default().save(path).await
    }

    /// Validate all configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.survey.device_id.trim().is_empty() {
            return Err(ConfigError::EmptyDeviceId);
        }
        if self.location.provider.trim().is_empty() {
            return Err(ConfigError::EmptyProvider);
        }
        if !self.location.accuracy_threshold_meters.is_finite()
            || self.location.accuracy_threshold_meters <= 0.0
        {
            return Err(ConfigError::InvalidAccuracyThreshold(
                self.location.accuracy_threshold_meters,
            ));
        }
        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            other => return Err(ConfigError::InvalidLogLevel(other.to_string())),
        }
        Ok(())
    }
}
