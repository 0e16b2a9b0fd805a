//! Static role policy table
//!
//! The table is built once on first use and never mutated afterwards. It is
//! the only source of category-level capabilities; per-document rules live
//! in `documents`.

use super::types::Category;
use crate::core::models::UserRole;
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap, HashSet};

type Grants = &'static [(Category, &'static [&'static str])];

const ADMIN_GRANTS: Grants = &[
    (
        Category::Documents,
        &["view", "create", "edit", "delete", "approve", "reject"],
    ),
    (
        Category::Users,
        &["view", "create", "edit", "delete", "reset_password"],
    ),
    (Category::System, &["configure", "backup", "restore", "logs"]),
    (Category::Workflows, &["view", "create", "edit", "delete"]),
    (Category::Analytics, &["view_all_departments", "export"]),
    (Category::Notifications, &["send_all", "manage"]),
];

const MANAGER_GRANTS: Grants = &[
    (Category::Documents, &["view_department", "approve", "reject"]),
    (Category::Users, &["view_department"]),
    (Category::System, &[]),
    (Category::Workflows, &["view_department"]),
    (Category::Analytics, &["view_department"]),
    (Category::Notifications, &["send_department"]),
];

const STAFF_GRANTS: Grants = &[
    (Category::Documents, &["view_own", "create"]),
    (Category::Users, &[]),
    (Category::System, &[]),
    (Category::Workflows, &[]),
    (Category::Analytics, &["view_own"]),
    (Category::Notifications, &["receive"]),
];

static POLICY: Lazy<PolicyTable> = Lazy::new(PolicyTable::standard);

/// Role → category → allowed action names
#[derive(Debug)]
pub struct PolicyTable {
    grants: HashMap<UserRole, HashMap<Category, HashSet<&'static str>>>,
}

impl PolicyTable {
    fn standard() -> Self {
        let grants: HashMap<UserRole, HashMap<Category, HashSet<&'static str>>> = [
            (UserRole::Admin, ADMIN_GRANTS),
            (UserRole::Manager, MANAGER_GRANTS),
            (UserRole::Staff, STAFF_GRANTS),
        ]
        .into_iter()
        .map(|(role, table)| {
            let categories: HashMap<Category, HashSet<&'static str>> = table
                .iter()
                .map(|(category, actions)| (*category, actions.iter().copied().collect()))
                .collect();
            (role, categories)
        })
        .collect();

        Self { grants }
    }

    /// Check whether `role` may perform `action` in `category`
    pub fn has_permission(&self, role: UserRole, category: Category, action: &str) -> bool {
        self.grants
            .get(&role)
            .and_then(|categories| categories.get(&category))
            .is_some_and(|actions| actions.contains(action))
    }

    /// Actions granted to `role` in `category`, sorted
    pub fn capabilities(&self, role: UserRole, category: Category) -> Vec<&'static str> {
        let mut actions: Vec<&'static str> = self
            .grants
            .get(&role)
            .and_then(|categories| categories.get(&category))
            .map(|actions| actions.iter().copied().collect())
            .unwrap_or_default();
        actions.sort_unstable();
        actions
    }

    /// Every category and its sorted actions for `role`
    pub fn grants(&self, role: UserRole) -> BTreeMap<Category, Vec<&'static str>> {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.capabilities(role, category)))
            .collect()
    }
}

/// The process-wide policy table
pub fn policy() -> &'static PolicyTable {
    &POLICY
}

/// Check whether `role` may perform `action` in `category`
pub fn has_permission(role: UserRole, category: Category, action: &str) -> bool {
    policy().has_permission(role, category, action)
}

/// String form of [`has_permission`] for untyped callers.
///
/// Unknown roles or categories deny.
pub fn has_permission_named(role: &str, category: &str, action: &str) -> bool {
    match (role.parse::<UserRole>(), category.parse::<Category>()) {
        (Ok(role), Ok(category)) => has_permission(role, category, action),
        _ => false,
    }
}
