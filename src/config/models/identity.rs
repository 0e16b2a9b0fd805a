//! Uploader identity configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Controls how unqualified uploader references are reconciled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Log a warning when a bare uploader string names one user by name and
    /// another by id
    #[serde(default = "default_true")]
    pub warn_on_ambiguous_uploader: bool,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            warn_on_ambiguous_uploader: true,
        }
    }
}

impl IdentityConfig {
    /// Merge identity configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.warn_on_ambiguous_uploader {
            self.warn_on_ambiguous_uploader = other.warn_on_ambiguous_uploader;
        }
        self
    }
}
