//! Record file loading
//!
//! Files ending in `.json` are JSON; anything else is YAML.

use crate::utils::error::{AccessError, Result};
use serde::de::DeserializeOwned;
use std::path::Path;
use tokio::fs;
use tracing::debug;

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Load a list of records from a YAML or JSON file
pub async fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    debug!("Loading records from {:?}", path);

    let content = fs::read_to_string(path).await.map_err(|e| {
        AccessError::not_found(format!("Failed to read {}: {}", path.display(), e))
    })?;

    if is_json(path) {
        Ok(serde_json::from_str(&content)?)
    } else {
        Ok(serde_yaml::from_str(&content)?)
    }
}
