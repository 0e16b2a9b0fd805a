//! Core data models
//!
//! Users and documents as read from the user directory and document store.

pub mod document;
pub mod user;

// Re-export commonly used types
pub use document::{Document, DocumentStatus, Uploader};
pub use user::{User, UserRole};
