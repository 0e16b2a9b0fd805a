//! Access control core

use super::policy::{self, PolicyTable};
use super::types::{AccessContext, AccessDecision, Category, DenialReason};
use crate::auth::audit::{AuditEntry, AuditLog};
use crate::config::Config;
use crate::core::models::UserRole;
use crate::storage::UserDirectory;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Role-based access control over documents.
///
/// Decisions are pure functions of the policy table, the user directory and
/// the inputs. The only side effect lives in the context-level checks, which
/// append denials to the audit log.
#[derive(Clone)]
pub struct AccessControl {
    pub(super) directory: Arc<dyn UserDirectory>,
    pub(super) audit: Arc<AuditLog>,
    pub(super) warn_on_ambiguous_uploader: bool,
    pub(super) reported_uploaders: Arc<Mutex<HashSet<String>>>,
}

impl AccessControl {
    /// Create access control with a default in-memory audit log
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            directory,
            audit: Arc::new(AuditLog::default()),
            warn_on_ambiguous_uploader: true,
            reported_uploaders: Arc::default(),
        }
    }

    /// Create access control from configuration
    pub fn from_config(config: &Config, directory: Arc<dyn UserDirectory>) -> Self {
        info!("Initializing access control");

        let audit = AuditLog::from_config(config.audit());
        debug!(
            "Audit log ready with {} of {} entries",
            audit.len(),
            audit.capacity()
        );

        Self {
            directory,
            audit: Arc::new(audit),
            warn_on_ambiguous_uploader: config.identity().warn_on_ambiguous_uploader,
            reported_uploaders: Arc::default(),
        }
    }

    /// Replace the audit log
    pub fn with_audit_log(mut self, audit: Arc<AuditLog>) -> Self {
        self.audit = audit;
        self
    }

    /// Enable or disable warnings for uploader strings naming two users
    pub fn with_ambiguity_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_ambiguous_uploader = enabled;
        self
    }

    /// Audit log receiving denials
    pub fn audit_log(&self) -> &Arc<AuditLog> {
        &self.audit
    }

    /// The policy table
    pub fn policy(&self) -> &'static PolicyTable {
        policy::policy()
    }

    /// Check whether `role` may perform `action` in `category`
    pub fn has_permission(&self, role: UserRole, category: Category, action: &str) -> bool {
        policy::has_permission(role, category, action)
    }

    /// Category-level check for the acting user, recording denials
    pub fn check_permission(
        &self,
        ctx: &AccessContext,
        category: Category,
        action: &str,
    ) -> AccessDecision {
        if ctx.has_permission(category, action) {
            return AccessDecision::allow();
        }

        let reason = DenialReason::MissingPermission {
            role: ctx.role(),
            category,
            action: action.to_string(),
        };
        self.record_denial(ctx, &format!("{}.{}", category, action), None, &reason);
        AccessDecision::deny(reason)
    }

    pub(super) fn record_denial(
        &self,
        ctx: &AccessContext,
        action: &str,
        document: Option<&str>,
        reason: &DenialReason,
    ) {
        let mut entry = AuditEntry::new(
            ctx.user().identity(),
            ctx.role().as_str(),
            action,
            reason.to_string(),
        )
        .with_source_map(ctx.source().clone());

        if let Some(document) = document {
            entry = entry.with_source("document_id", document);
        }

        self.audit.record(entry);
    }
}
