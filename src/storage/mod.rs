//! Storage collaborators for access control
//!
//! Access control reads users and documents through the [`UserDirectory`]
//! and [`DocumentStore`] traits and never writes through them. In-memory
//! implementations stand in for the dashboard's browser storage and can be
//! populated from YAML or JSON files.

/// Record file loading
pub mod files;
/// In-memory collaborators
pub mod memory;

pub use memory::{InMemoryDocumentStore, InMemoryUserDirectory};

use crate::config::DataConfig;
use crate::core::models::{Document, User};
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Looks up users by id or by name
pub trait UserDirectory: Send + Sync {
    /// Find a user by id
    fn find_by_id(&self, id: &str) -> Option<User>;

    /// Find a user by display name
    fn find_by_name(&self, name: &str) -> Option<User>;

    /// Find a user by an identifier that may be either an id or a name.
    ///
    /// Ids are tried first.
    fn find_user(&self, identifier: &str) -> Option<User> {
        self.find_by_id(identifier)
            .or_else(|| self.find_by_name(identifier))
    }
}

/// Read-only view of stored documents
pub trait DocumentStore: Send + Sync {
    /// Snapshot of all documents in store order
    fn list(&self) -> Vec<Document>;

    /// Find a document by id
    fn get(&self, id: &str) -> Option<Document> {
        self.list().into_iter().find(|doc| doc.id == id)
    }
}

/// User directory and document store loaded together
#[derive(Clone)]
pub struct DataSources {
    /// User directory
    pub users: Arc<InMemoryUserDirectory>,
    /// Document store
    pub documents: Arc<InMemoryDocumentStore>,
}

impl DataSources {
    /// Load the configured data files; unset paths yield empty collections
    pub async fn load(config: &DataConfig) -> Result<Self> {
        info!("Loading data sources");

        let users: Vec<User> = match &config.users_path {
            Some(path) => files::load_records(path).await?,
            None => {
                debug!("No users path configured, starting with an empty directory");
                Vec::new()
            }
        };

        let documents: Vec<Document> = match &config.documents_path {
            Some(path) => files::load_records(path).await?,
            None => {
                debug!("No documents path configured, starting with an empty store");
                Vec::new()
            }
        };

        info!(
            "Loaded {} users and {} documents",
            users.len(),
            documents.len()
        );

        Ok(Self {
            users: Arc::new(InMemoryUserDirectory::new(users)),
            documents: Arc::new(InMemoryDocumentStore::new(documents)),
        })
    }
}
