//! Configuration data models
//!
//! This module defines all configuration structures used by the engine.

pub mod access;
pub mod audit;
pub mod data;
pub mod identity;
pub mod logging;

// Re-export all configuration types
pub use access::*;
pub use audit::*;
pub use data::*;
pub use identity::*;
pub use logging::*;

/// Default number of retained audit entries
pub fn default_audit_capacity() -> usize {
    1000
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}
