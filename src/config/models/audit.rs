//! Audit log configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Audit log configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Maximum number of retained entries; oldest are evicted first
    #[serde(default = "default_audit_capacity")]
    pub capacity: usize,
    /// JSON file the log is persisted to after each denial
    #[serde(default)]
    pub persist_path: Option<PathBuf>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            capacity: default_audit_capacity(),
            persist_path: None,
        }
    }
}

impl AuditConfig {
    /// Merge audit configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.capacity != default_audit_capacity() {
            self.capacity = other.capacity;
        }
        if other.persist_path.is_some() {
            self.persist_path = other.persist_path;
        }
        self
    }
}
