//! Common test utilities for kmrl-access
//!
//! - Test fixtures and data factories
//! - Helpers writing users and documents to temporary files
//!
//! # Usage
//!
//! ```rust
//! use crate::common::fixtures::{self, DocumentFactory};
//!
//! #[test]
//! fn my_test() {
//!     let acl = fixtures::access_control();
//!     let doc = DocumentFactory::by("Sarah");
//!     // ...
//! }
//! ```

pub mod fixtures;

// Re-export commonly used items
pub use fixtures::{DocumentFactory, UserFactory};
