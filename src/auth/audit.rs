//! Unauthorized-access audit log
//!
//! Denials reported through [`crate::auth::AccessControl`] land here. The log
//! keeps the most recent `capacity` entries, evicting the oldest first, and
//! can mirror itself to a JSON file. Persistence is best-effort: failures are
//! logged and never reach the caller.

use crate::config::{AuditConfig, default_audit_capacity};
use crate::utils::bounded::BoundedPush;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

/// One denied access attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Entry id
    pub id: Uuid,
    /// When the attempt was denied
    pub timestamp: DateTime<Utc>,
    /// Identity of the acting user
    pub user: String,
    /// Role of the acting user
    pub role: String,
    /// Attempted action
    pub action: String,
    /// Denial message
    pub message: String,
    /// Request metadata (page, widget, document id, ...)
    #[serde(default)]
    pub source: HashMap<String, serde_json::Value>,
}

impl AuditEntry {
    pub fn new<U, R, A, M>(user: U, role: R, action: A, message: M) -> Self
    where
        U: Into<String>,
        R: Into<String>,
        A: Into<String>,
        M: Into<String>,
    {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            user: user.into(),
            role: role.into(),
            action: action.into(),
            message: message.into(),
            source: HashMap::new(),
        }
    }

    pub fn with_source<K: Into<String>, V: Into<serde_json::Value>>(
        mut self,
        key: K,
        value: V,
    ) -> Self {
        self.source.insert(key.into(), value.into());
        self
    }

    pub fn with_source_map(mut self, source: HashMap<String, serde_json::Value>) -> Self {
        self.source.extend(source);
        self
    }
}

/// Append-only, fixed-capacity log of denied attempts
#[derive(Debug)]
pub struct AuditLog {
    capacity: usize,
    entries: Mutex<VecDeque<AuditEntry>>,
    persist_path: Option<PathBuf>,
}

impl Default for AuditLog {
    fn default() -> Self {
        Self::new(default_audit_capacity())
    }
}

impl AuditLog {
    /// Create an in-memory log; a zero capacity is treated as one
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity.min(1024))),
            persist_path: None,
        }
    }

    /// Mirror the log to `path` after every change
    pub fn with_persist_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.persist_path = Some(path.into());
        self
    }

    /// Build the log from configuration, resuming from the persisted file
    /// when one exists. An unreadable file starts an empty log.
    pub fn from_config(config: &AuditConfig) -> Self {
        let Some(path) = &config.persist_path else {
            return Self::new(config.capacity);
        };

        match Self::load(path, config.capacity) {
            Ok(log) => log,
            Err(e) => {
                warn!("Failed to load audit log from {:?}: {}", path, e);
                Self::new(config.capacity).with_persist_path(path.clone())
            }
        }
    }

    /// Load a persisted log, keeping its newest `capacity` entries.
    ///
    /// A missing file yields an empty log bound to `path`.
    pub fn load(path: &Path, capacity: usize) -> Result<Self> {
        let log = Self::new(capacity).with_persist_path(path);

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No audit log at {:?}, starting empty", path);
                return Ok(log);
            }
            Err(e) => return Err(e.into()),
        };

        let stored: Vec<AuditEntry> = serde_json::from_str(&content)?;
        {
            let mut entries = log.entries.lock();
            for entry in stored {
                entries.push_bounded(entry, log.capacity);
            }
        }

        debug!("Loaded {} audit entries from {:?}", log.len(), path);
        Ok(log)
    }

    /// Append a denial, evicting the oldest entry when full
    pub fn record(&self, entry: AuditEntry) {
        warn!(
            user = %entry.user,
            role = %entry.role,
            action = %entry.action,
            "Unauthorized access attempt: {}",
            entry.message
        );

        let mut entries = self.entries.lock();
        entries.push_bounded(entry, self.capacity);
        self.persist_best_effort(&entries);
    }

    /// Snapshot of all entries, oldest first
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries.lock().iter().cloned().collect()
    }

    /// The newest `n` entries, oldest first
    pub fn recent(&self, n: usize) -> Vec<AuditEntry> {
        let entries = self.entries.lock();
        let skip = entries.len().saturating_sub(n);
        entries.iter().skip(skip).cloned().collect()
    }

    /// Entries recorded for one user identity, oldest first
    pub fn for_user(&self, identity: &str) -> Vec<AuditEntry> {
        self.entries
            .lock()
            .iter()
            .filter(|e| e.user == identity)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry
    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        entries.clear();
        self.persist_best_effort(&entries);
    }

    /// Write the log to its persist path, if any
    pub fn persist(&self) -> Result<()> {
        let entries = self.entries.lock();
        match &self.persist_path {
            Some(path) => write_entries(path, &entries),
            None => Ok(()),
        }
    }

    fn persist_best_effort(&self, entries: &VecDeque<AuditEntry>) {
        if let Some(path) = &self.persist_path {
            if let Err(e) = write_entries(path, entries) {
                warn!("Failed to persist audit log to {:?}: {}", path, e);
            }
        }
    }
}

fn write_entries(path: &Path, entries: &VecDeque<AuditEntry>) -> Result<()> {
    let content = serde_json::to_string_pretty(entries)?;
    std::fs::write(path, content)?;
    Ok(())
}
