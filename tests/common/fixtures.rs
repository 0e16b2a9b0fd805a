//! Test fixtures and data factories
//!
//! Provides factory methods for creating test data with sensible defaults.
//! The standard directory mirrors a small KMRL deployment: one admin, an
//! Operations manager and staff member, a Finance manager and staff member.

use kmrl_access::{
    AccessControl, Document, DocumentStatus, InMemoryDocumentStore, InMemoryUserDirectory,
    Uploader, User, UserRole,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

/// Factory for creating test users
pub struct UserFactory;

impl UserFactory {
    pub fn admin() -> User {
        User::new("Asha", UserRole::Admin).with_id("u1")
    }

    pub fn operations_manager() -> User {
        User::new("Rahul", UserRole::Manager)
            .with_id("u2")
            .with_department("Operations")
    }

    pub fn operations_staff() -> User {
        User::new("Sarah", UserRole::Staff)
            .with_id("u3")
            .with_department("Operations")
    }

    pub fn finance_manager() -> User {
        User::new("Meera", UserRole::Manager)
            .with_id("u4")
            .with_department("Finance")
    }

    pub fn finance_staff() -> User {
        User::new("Vikram", UserRole::Staff)
            .with_id("u5")
            .with_department("Finance")
    }

    /// Staff member with a random id and no department
    pub fn random_staff() -> User {
        let id = Uuid::new_v4().to_string();
        User::new(format!("staff_{}", &id[..8]), UserRole::Staff).with_id(id)
    }

    /// Every standard user
    pub fn all() -> Vec<User> {
        vec![
            Self::admin(),
            Self::operations_manager(),
            Self::operations_staff(),
            Self::finance_manager(),
            Self::finance_staff(),
        ]
    }
}

/// Factory for creating test documents
pub struct DocumentFactory;

impl DocumentFactory {
    /// Pending document with a random id uploaded by `uploader`
    pub fn by(uploader: &str) -> Document {
        Document::new(
            format!("doc-{}", &Uuid::new_v4().to_string()[..8]),
            Uploader::from(uploader),
        )
    }

    /// Document with a fixed id
    pub fn with_id(id: &str, uploader: &str) -> Document {
        Document::new(id, Uploader::from(uploader))
    }

    /// The standard document set, in store order
    pub fn catalogue() -> Vec<Document> {
        vec![
            Self::with_id("metro-maintenance", "Sarah").with_status(DocumentStatus::Pending),
            Self::with_id("budget-q3", "u5")
                .with_department("Finance")
                .with_status(DocumentStatus::UnderReview),
            Self::with_id("safety-audit", "u3").with_status(DocumentStatus::Approved),
            Self::with_id("tender-notice", "Vikram").with_status(DocumentStatus::Pending),
            Self::with_id("depot-roster", "Rahul").with_status(DocumentStatus::Draft),
            Self::with_id("vendor-contract", "ghost").with_status(DocumentStatus::Pending),
        ]
    }
}

/// Directory holding [`UserFactory::all`]
pub fn directory() -> Arc<InMemoryUserDirectory> {
    Arc::new(InMemoryUserDirectory::new(UserFactory::all()))
}

/// Store holding [`DocumentFactory::catalogue`]
pub fn document_store() -> InMemoryDocumentStore {
    InMemoryDocumentStore::new(DocumentFactory::catalogue())
}

/// Access control over the standard directory
pub fn access_control() -> AccessControl {
    AccessControl::new(directory())
}

/// Write `content` to `name` inside `dir`
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
