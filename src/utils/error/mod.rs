//! Error handling for the access-control engine
//!
//! Decisions never fail; errors only surface at the edges (configuration,
//! data loading and mutation guards).

mod helpers;
mod types;

pub use types::{AccessError, Result};
