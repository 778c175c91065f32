//! Configuration management
//!
//! This module handles loading, validation, and management of ClubCentral configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{ClubError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "CLUBCENTRAL_LOG_LEVEL";
/// Environment variable overriding the log format
pub const ENV_LOG_FORMAT: &str = "CLUBCENTRAL_LOG_FORMAT";
/// Environment variable enabling strict permission keys
pub const ENV_STRICT_PERMISSION_KEYS: &str = "CLUBCENTRAL_STRICT_PERMISSION_KEYS";

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// RBAC configuration
    #[serde(default)]
    pub rbac: RbacConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ClubError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| ClubError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();

        if let Ok(level) = std::env::var(ENV_LOG_LEVEL) {
            config.logging.level = level;
        }

        if let Ok(format) = std::env::var(ENV_LOG_FORMAT) {
            config.logging.format = format
                .parse()
                .map_err(|e| ClubError::Config(format!("{}: {}", ENV_LOG_FORMAT, e)))?;
        }

        if let Ok(strict) = std::env::var(ENV_STRICT_PERMISSION_KEYS) {
            config.rbac.strict_permission_keys = parse_flag(&strict).ok_or_else(|| {
                ClubError::Config(format!(
                    "{} must be true or false, got '{}'",
                    ENV_STRICT_PERMISSION_KEYS, strict
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    /// Get RBAC configuration
    pub fn rbac(&self) -> &RbacConfig {
        &self.rbac
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        Validate::validate(&self.logging)
            .map_err(|e| ClubError::Config(format!("Logging config error: {}", e)))?;

        Validate::validate(&self.rbac)
            .map_err(|e| ClubError::Config(format!("RBAC config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.logging = self.logging.merge(other.logging);
        self.rbac = self.rbac.merge(other.rbac);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ClubError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ClubError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
