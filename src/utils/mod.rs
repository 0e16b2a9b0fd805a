//! Utility modules
//!
//! - **error**: Error types and helpers
//! - **logging**: Tracing subscriber setup
//! - **bounded**: Fixed-capacity collection helpers

pub(crate) mod bounded;
pub mod error;
pub mod logging;

pub use error::{AccessError, Result};
