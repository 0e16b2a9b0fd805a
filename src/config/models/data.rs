//! Data source configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Files backing the user directory and document store.
///
/// `.json` files are read as JSON, anything else as YAML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// User records
    #[serde(default)]
    pub users_path: Option<PathBuf>,
    /// Document records
    #[serde(default)]
    pub documents_path: Option<PathBuf>,
}

impl DataConfig {
    /// Merge data configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.users_path.is_some() {
            self.users_path = other.users_path;
        }
        if other.documents_path.is_some() {
            self.documents_path = other.documents_path;
        }
        self
    }
}
