//! Core user types and enums

use serde::{Deserialize, Serialize};

/// User account as held by the user directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable identifier, absent for legacy records keyed by name only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name
    pub name: String,
    /// User role
    pub role: UserRole,
    /// Department the user belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// User role
///
/// Roles are a policy lookup key. There is no ordering between them and no
/// role inherits another role's capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Administrator
    Admin,
    /// Department manager
    Manager,
    /// Regular staff member
    Staff,
}

impl UserRole {
    /// All roles known to the policy table
    pub const ALL: [UserRole; 3] = [UserRole::Admin, UserRole::Manager, UserRole::Staff];

    /// Name used in policy lookups and audit entries
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
            UserRole::Staff => "staff",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "manager" => Ok(UserRole::Manager),
            "staff" => Ok(UserRole::Staff),
            _ => Err(format!("Invalid user role: {}", s)),
        }
    }
}

impl User {
    /// Create a new user without id or department
    pub fn new<S: Into<String>>(name: S, role: UserRole) -> Self {
        Self {
            id: None,
            name: name.into(),
            role,
            department: None,
        }
    }

    /// Set the user id
    pub fn with_id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the department
    pub fn with_department<S: Into<String>>(mut self, department: S) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Identity used in audit records: the id when present, else the name
    pub fn identity(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }

    /// Check whether `identifier` names this user, by id or by name
    pub fn is_identified_by(&self, identifier: &str) -> bool {
        self.name == identifier || self.id.as_deref() == Some(identifier)
    }

    /// Check if user belongs to the given department.
    ///
    /// A user without a department belongs to none.
    pub fn in_department(&self, department: &str) -> bool {
        self.department.as_deref() == Some(department)
    }
}
