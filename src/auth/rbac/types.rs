//! RBAC type definitions

use crate::core::models::{User, UserRole};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Capability category in the policy table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Documents,
    Users,
    System,
    Workflows,
    Analytics,
    Notifications,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Documents,
        Category::Users,
        Category::System,
        Category::Workflows,
        Category::Analytics,
        Category::Notifications,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Documents => "documents",
            Category::Users => "users",
            Category::System => "system",
            Category::Workflows => "workflows",
            Category::Analytics => "analytics",
            Category::Notifications => "notifications",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Invalid permission category: {}", s))
    }
}

/// Operation on a single document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
    Approve,
    Reject,
    Download,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::View,
        Action::Create,
        Action::Edit,
        Action::Delete,
        Action::Approve,
        Action::Reject,
        Action::Download,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Delete => "delete",
            Action::Approve => "approve",
            Action::Reject => "reject",
            Action::Download => "download",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| format!("Invalid document action: {}", s))
    }
}

/// Why a request was denied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenialReason {
    /// The category table does not grant the action to the role
    MissingPermission {
        role: UserRole,
        category: Category,
        action: String,
    },
    /// Only administrators may perform the action
    AdminOnly { action: Action },
    /// The role may never perform the action
    RoleNotAllowed { role: UserRole, action: Action },
    /// Staff acting on a document someone else uploaded
    NotOwner { document: String },
    /// Manager acting on a document from another department
    OutsideDepartment { document: String },
    /// The acting manager has no department
    NoDepartment,
    /// The document has no department and neither has its uploader
    UploaderWithoutDepartment { uploader: String },
    /// The document's uploader is not in the user directory
    UnresolvedUploader { uploader: String },
    /// The action does not apply to an existing document
    NotApplicable { action: Action },
}

impl std::fmt::Display for DenialReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingPermission {
                role,
                category,
                action,
            } => write!(f, "Role '{}' lacks permission {}.{}", role, category, action),
            Self::AdminOnly { action } => {
                write!(f, "Only administrators can {} documents", action)
            }
            Self::RoleNotAllowed { role, action } => {
                write!(f, "Role '{}' cannot {} documents", role, action)
            }
            Self::NotOwner { document } => {
                write!(f, "Document '{}' was uploaded by another user", document)
            }
            Self::OutsideDepartment { document } => {
                write!(f, "Document '{}' belongs to another department", document)
            }
            Self::NoDepartment => write!(f, "User has no department"),
            Self::UploaderWithoutDepartment { uploader } => {
                write!(f, "Uploader '{}' has no department", uploader)
            }
            Self::UnresolvedUploader { uploader } => {
                write!(f, "Uploader '{}' could not be resolved", uploader)
            }
            Self::NotApplicable { action } => {
                write!(f, "Action '{}' does not apply to an existing document", action)
            }
        }
    }
}

/// Outcome of an access check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDecision {
    /// Whether access is granted
    pub granted: bool,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<DenialReason>,
}

impl AccessDecision {
    pub fn allow() -> Self {
        Self {
            granted: true,
            denial_reason: None,
        }
    }

    pub fn deny(reason: DenialReason) -> Self {
        Self {
            granted: false,
            denial_reason: Some(reason),
        }
    }

    /// Human-readable denial message, if denied
    pub fn message(&self) -> Option<String> {
        self.denial_reason.as_ref().map(ToString::to_string)
    }
}

impl From<Result<(), DenialReason>> for AccessDecision {
    fn from(result: Result<(), DenialReason>) -> Self {
        match result {
            Ok(()) => Self::allow(),
            Err(reason) => Self::deny(reason),
        }
    }
}

/// The acting user plus request metadata, passed explicitly into every
/// context-level check
#[derive(Debug, Clone)]
pub struct AccessContext {
    user: User,
    source: HashMap<String, serde_json::Value>,
}

impl AccessContext {
    pub fn new(user: User) -> Self {
        Self {
            user,
            source: HashMap::new(),
        }
    }

    /// Attach request metadata recorded with audit entries (page, widget, ...)
    pub fn with_source<K: Into<String>, V: Into<serde_json::Value>>(
        mut self,
        key: K,
        value: V,
    ) -> Self {
        self.source.insert(key.into(), value.into());
        self
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn role(&self) -> UserRole {
        self.user.role
    }

    pub fn source(&self) -> &HashMap<String, serde_json::Value> {
        &self.source
    }

    /// Category-level check for the acting user's role
    pub fn has_permission(&self, category: Category, action: &str) -> bool {
        super::policy::has_permission(self.user.role, category, action)
    }
}
