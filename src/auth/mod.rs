//! Authorization for the document dashboard
//!
//! - [`rbac`]: policy table, document visibility and action rules
//! - [`audit`]: log of denied attempts

pub mod audit;
pub mod rbac;

// Re-export commonly used types
pub use audit::{AuditEntry, AuditLog};
pub use rbac::{
    AccessContext, AccessControl, AccessDecision, Action, Category, DenialReason, PolicyTable,
};
