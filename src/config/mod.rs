//! Configuration management for the access-control engine
//!
//! This module handles loading, validation, and merging of configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{AccessError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Access-control configuration
    pub access: AccessConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AccessError::Config(format!("Failed to read config file: {}", e)))?;

        let access: AccessConfig = serde_yaml::from_str(&content)
            .map_err(|e| AccessError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { access };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let access = AccessConfig::from_env()?;
        let config = Self { access };

        config.validate()?;
        Ok(config)
    }

    /// Get audit configuration
    pub fn audit(&self) -> &AuditConfig {
        &self.access.audit
    }

    /// Get identity configuration
    pub fn identity(&self) -> &IdentityConfig {
        &self.access.identity
    }

    /// Get data source configuration
    pub fn data(&self) -> &DataConfig {
        &self.access.data
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.access.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        Validate::validate(&self.access)
            .map_err(|e| AccessError::validation(format!("Access config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.access = self.access.merge(other.access);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.access)
            .map_err(|e| AccessError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
