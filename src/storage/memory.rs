//! In-memory user directory and document store

use super::{DocumentStore, UserDirectory};
use crate::core::models::{Document, User};
use parking_lot::RwLock;

/// User directory backed by a vector of records.
///
/// Lookups return the first matching record in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserDirectory {
    /// Create a directory from user records
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// Add or replace a user, keyed by identity
    pub fn upsert(&self, user: User) {
        let mut users = self.users.write();
        match users.iter_mut().find(|u| u.identity() == user.identity()) {
            Some(existing) => *existing = user,
            None => users.push(user),
        }
    }

    /// Remove a user by id or name; returns whether a record was removed
    pub fn remove(&self, identifier: &str) -> bool {
        let mut users = self.users.write();
        let before = users.len();
        users.retain(|u| !u.is_identified_by(identifier));
        users.len() != before
    }

    /// Number of users
    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    /// Whether the directory is empty
    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn find_by_id(&self, id: &str) -> Option<User> {
        self.users
            .read()
            .iter()
            .find(|u| u.id.as_deref() == Some(id))
            .cloned()
    }

    fn find_by_name(&self, name: &str) -> Option<User> {
        self.users.read().iter().find(|u| u.name == name).cloned()
    }
}

/// Document store backed by a vector of records
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<Vec<Document>>,
}

impl InMemoryDocumentStore {
    /// Create a store from document records
    pub fn new(documents: Vec<Document>) -> Self {
        Self {
            documents: RwLock::new(documents),
        }
    }

    /// Append a document
    pub fn insert(&self, document: Document) {
        self.documents.write().push(document);
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn list(&self) -> Vec<Document> {
        self.documents.read().clone()
    }

    fn get(&self, id: &str) -> Option<Document> {
        self.documents.read().iter().find(|d| d.id == id).cloned()
    }
}
