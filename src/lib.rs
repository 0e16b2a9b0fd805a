//! # KMRL Access
//!
//! Role-based access control and document visibility for the KMRL document
//! management dashboard.
//!
//! ## Features
//!
//! - **Static Policy Table**: Role → category → action capabilities, fixed at startup
//! - **Document Visibility**: Admins see everything, managers their department,
//!   staff their own uploads
//! - **Document Actions**: Delete, approve, reject, edit, view and download rules
//! - **Fail-Closed**: Unknown roles, actions or uploaders deny
//! - **Audit Log**: Bounded record of denied requests with optional JSON persistence
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kmrl_access::{AccessControl, Document, InMemoryUserDirectory, Uploader, User, UserRole};
//! use std::sync::Arc;
//!
//! let directory = Arc::new(InMemoryUserDirectory::new(vec![
//!     User::new("Sarah", UserRole::Staff)
//!         .with_id("u3")
//!         .with_department("Operations"),
//! ]));
//! let acl = AccessControl::new(directory);
//!
//! let manager = User::new("Rahul", UserRole::Manager).with_department("Operations");
//! let document = Document::new("d1", Uploader::from("Sarah"));
//!
//! assert!(acl.can_access_document(&manager, &document));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{AccessError, Result};

// Export access control
pub use auth::{
    AccessContext, AccessControl, AccessDecision, Action, AuditEntry, AuditLog, Category,
    DenialReason, PolicyTable,
};
pub use auth::rbac::{has_permission, has_permission_named, policy};

// Export models and collaborators
pub use core::models::{Document, DocumentStatus, Uploader, User, UserRole};
pub use storage::{
    DataSources, DocumentStore, InMemoryDocumentStore, InMemoryUserDirectory, UserDirectory,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
