//! Top-level access-control configuration

use super::*;
use crate::utils::error::{AccessError, Result};
use serde::{Deserialize, Serialize};

/// Access-control configuration as read from a config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Audit log settings
    #[serde(default)]
    pub audit: AuditConfig,
    /// Uploader identity handling
    #[serde(default)]
    pub identity: IdentityConfig,
    /// User and document data sources
    #[serde(default)]
    pub data: DataConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AccessConfig {
    /// Build configuration from `KMRL_*` environment variables.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(capacity) = env_var("KMRL_AUDIT_CAPACITY") {
            config.audit.capacity = capacity.parse().map_err(|e| {
                AccessError::config(format!("Invalid KMRL_AUDIT_CAPACITY '{}': {}", capacity, e))
            })?;
        }
        if let Some(path) = env_var("KMRL_AUDIT_PERSIST_PATH") {
            config.audit.persist_path = Some(path.into());
        }
        if let Some(flag) = env_var("KMRL_WARN_AMBIGUOUS_UPLOADER") {
            config.identity.warn_on_ambiguous_uploader =
                parse_bool("KMRL_WARN_AMBIGUOUS_UPLOADER", &flag)?;
        }
        if let Some(path) = env_var("KMRL_USERS_PATH") {
            config.data.users_path = Some(path.into());
        }
        if let Some(path) = env_var("KMRL_DOCUMENTS_PATH") {
            config.data.documents_path = Some(path.into());
        }
        if let Some(level) = env_var("KMRL_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(flag) = env_var("KMRL_LOG_JSON") {
            config.logging.json = parse_bool("KMRL_LOG_JSON", &flag)?;
        }

        Ok(config)
    }

    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.audit = self.audit.merge(other.audit);
        self.identity = self.identity.merge(other.identity);
        self.data = self.data.merge(other.data);
        self.logging = self.logging.merge(other.logging);
        self
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AccessError::config(format!(
            "Invalid {} '{}': expected true or false",
            name, other
        ))),
    }
}
