//! Per-document visibility and action rules

use super::helpers::UploaderResolution;
use super::system::AccessControl;
use super::types::{AccessContext, AccessDecision, Action, DenialReason};
use crate::core::models::{Document, User, UserRole};
use crate::storage::DocumentStore;
use crate::utils::error::{AccessError, Result};
use tracing::debug;

impl AccessControl {
    /// Whether `user` may see `document`.
    ///
    /// Gates both list rows and per-document actions.
    pub fn can_access_document(&self, user: &User, document: &Document) -> bool {
        self.visibility(user, document).is_ok()
    }

    /// Whether `role` may perform `action` on `document` on behalf of `user`
    pub fn can_perform_document_action(
        &self,
        role: UserRole,
        action: Action,
        document: &Document,
        user: &User,
    ) -> bool {
        self.evaluate(role, action, document, user).is_ok()
    }

    /// String form of [`Self::can_perform_document_action`] for untyped callers.
    ///
    /// Unknown roles or actions, or a missing document or user, deny.
    pub fn can_perform_named(
        &self,
        role: &str,
        action: &str,
        document: Option<&Document>,
        user: Option<&User>,
    ) -> bool {
        let (Ok(role), Ok(action), Some(document), Some(user)) = (
            role.parse::<UserRole>(),
            action.parse::<Action>(),
            document,
            user,
        ) else {
            debug!(role, action, "Malformed document action request denied");
            return false;
        };

        self.can_perform_document_action(role, action, document, user)
    }

    /// Documents visible to `user`, in their original order
    pub fn filter_visible<'a>(
        &self,
        user: &User,
        documents: &'a [Document],
    ) -> Vec<&'a Document> {
        documents
            .iter()
            .filter(|doc| self.can_access_document(user, doc))
            .collect()
    }

    /// Visible subset of a document store snapshot
    pub fn visible_documents(&self, user: &User, store: &dyn DocumentStore) -> Vec<Document> {
        store
            .list()
            .into_iter()
            .filter(|doc| self.can_access_document(user, doc))
            .collect()
    }

    /// Visible documents awaiting review that `user` may approve
    pub fn approval_queue(&self, user: &User, store: &dyn DocumentStore) -> Vec<Document> {
        store
            .list()
            .into_iter()
            .filter(|doc| doc.status.is_awaiting_review())
            .filter(|doc| {
                self.can_perform_document_action(user.role, Action::Approve, doc, user)
            })
            .collect()
    }

    /// Decide a document action for the acting user, recording denials
    pub fn check(
        &self,
        ctx: &AccessContext,
        action: Action,
        document: &Document,
    ) -> AccessDecision {
        let result = self.evaluate(ctx.role(), action, document, ctx.user());

        if let Err(reason) = &result {
            self.record_denial(ctx, action.as_str(), Some(&document.id), reason);
        }

        result.into()
    }

    /// Mutation guard: like [`Self::check`] but denials become errors
    pub fn guard(&self, ctx: &AccessContext, action: Action, document: &Document) -> Result<()> {
        match self.check(ctx, action, document).denial_reason {
            None => Ok(()),
            Some(reason) => Err(AccessError::forbidden(reason.to_string())),
        }
    }

    fn evaluate(
        &self,
        role: UserRole,
        action: Action,
        document: &Document,
        user: &User,
    ) -> std::result::Result<(), DenialReason> {
        match action {
            Action::Delete => match role {
                UserRole::Admin => Ok(()),
                _ => Err(DenialReason::AdminOnly { action }),
            },
            Action::Approve | Action::Reject => match role {
                UserRole::Admin | UserRole::Manager => self.visibility(user, document),
                UserRole::Staff => Err(DenialReason::RoleNotAllowed { role, action }),
            },
            Action::Edit => match role {
                UserRole::Admin => Ok(()),
                UserRole::Staff if self.is_uploader(user, document) => Ok(()),
                UserRole::Staff => Err(DenialReason::NotOwner {
                    document: document.id.clone(),
                }),
                UserRole::Manager => Err(DenialReason::RoleNotAllowed { role, action }),
            },
            Action::View | Action::Download => self.visibility(user, document),
            Action::Create => Err(DenialReason::NotApplicable { action }),
        }
    }

    fn visibility(
        &self,
        user: &User,
        document: &Document,
    ) -> std::result::Result<(), DenialReason> {
        match user.role {
            UserRole::Admin => Ok(()),
            UserRole::Manager => {
                let Some(department) = user.department.as_deref() else {
                    return Err(DenialReason::NoDepartment);
                };
                if self.effective_department(document)? == department {
                    Ok(())
                } else {
                    Err(DenialReason::OutsideDepartment {
                        document: document.id.clone(),
                    })
                }
            }
            UserRole::Staff => {
                if self.is_uploader(user, document) {
                    Ok(())
                } else {
                    Err(DenialReason::NotOwner {
                        document: document.id.clone(),
                    })
                }
            }
        }
    }
}
