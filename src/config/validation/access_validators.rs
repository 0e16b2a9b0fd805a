//! Access-control configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use std::path::Path;
use tracing::debug;

/// Upper bound on retained audit entries
const MAX_AUDIT_CAPACITY: usize = 100_000;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Validate for AccessConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating access configuration");

        self.audit.validate()?;
        self.data.validate()?;
        self.logging.validate()?;

        Ok(())
    }
}

impl Validate for AuditConfig {
    fn validate(&self) -> Result<(), String> {
        if self.capacity == 0 {
            return Err("Audit capacity must be greater than 0".to_string());
        }

        if self.capacity > MAX_AUDIT_CAPACITY {
            return Err(format!(
                "Audit capacity should not exceed {} entries",
                MAX_AUDIT_CAPACITY
            ));
        }

        if let Some(path) = &self.persist_path {
            check_path("Audit persist path", path)?;
        }

        Ok(())
    }
}

impl Validate for DataConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.users_path {
            check_path("Users path", path)?;
        }
        if let Some(path) = &self.documents_path {
            check_path("Documents path", path)?;
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let level = self.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(format!(
                "Log level '{}' is not one of {}",
                self.level,
                LOG_LEVELS.join(", ")
            ));
        }
        Ok(())
    }
}

fn check_path(context: &str, path: &Path) -> Result<(), String> {
    if path.as_os_str().is_empty() {
        return Err(format!("{} cannot be empty", context));
    }
    Ok(())
}
