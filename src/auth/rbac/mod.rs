//! Role-based access control (RBAC) system
//!
//! Two layers decide every request:
//!
//! - the static [`PolicyTable`] answers category-level questions
//!   ("may a manager send department notifications?");
//! - per-document rules in [`AccessControl`] answer whether a user may see
//!   or act on one specific document.
//!
//! Both layers fail closed: unknown roles, actions or uploaders deny.

mod documents;
mod helpers;
mod policy;
mod system;
mod types;

// Re-export public types and structs
pub use policy::{PolicyTable, has_permission, has_permission_named, policy};
pub use system::AccessControl;
pub use types::{AccessContext, AccessDecision, Action, Category, DenialReason};
