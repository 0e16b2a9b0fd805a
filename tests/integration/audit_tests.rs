//! Audit log integration tests

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{self, DocumentFactory, UserFactory};
    use kmrl_access::{AccessContext, Action, AuditLog, Category};
    use std::sync::Arc;
    use tempfile::tempdir;

    #[test]
    fn test_denials_carry_context_metadata() {
        let acl = fixtures::access_control();
        let ctx = AccessContext::new(UserFactory::operations_manager())
            .with_source("page", "documents")
            .with_source("widget", "approval-panel");

        let document = DocumentFactory::with_id("budget-q3", "Vikram");
        assert!(!acl.check(&ctx, Action::Approve, &document).granted);

        let entries = acl.audit_log().entries();
        let entry = &entries[0];
        assert_eq!(entry.user, "u2");
        assert_eq!(entry.role, "manager");
        assert_eq!(entry.action, "approve");
        assert!(entry.message.contains("another department"));
        assert_eq!(entry.source["widget"], serde_json::json!("approval-panel"));
        assert_eq!(entry.source["document_id"], serde_json::json!("budget-q3"));
    }

    #[test]
    fn test_predicates_never_record() {
        let acl = fixtures::access_control();
        let documents = DocumentFactory::catalogue();

        for user in UserFactory::all() {
            let _ = acl.filter_visible(&user, &documents);
            for document in &documents {
                for action in Action::ALL {
                    let _ = acl.can_perform_document_action(user.role, action, document, &user);
                }
            }
        }

        assert!(acl.audit_log().is_empty());
    }

    #[test]
    fn test_default_capacity_evicts_oldest() {
        let acl = fixtures::access_control();
        let ctx = AccessContext::new(UserFactory::operations_staff());

        for i in 0..1005 {
            let _ = acl.check_permission(&ctx, Category::System, &format!("op_{}", i));
        }

        let log = acl.audit_log();
        assert_eq!(log.len(), 1000);
        assert_eq!(log.entries()[0].action, "system.op_5");
        assert_eq!(log.recent(1)[0].action, "system.op_1004");
    }

    #[test]
    fn test_shared_log_persists_and_clears() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("audit.json");
        let log = Arc::new(AuditLog::new(50).with_persist_path(&path));
        let acl = fixtures::access_control().with_audit_log(Arc::clone(&log));

        let ctx = AccessContext::new(UserFactory::finance_staff());
        let err = acl
            .guard(&ctx, Action::Delete, &DocumentFactory::by("Vikram"))
            .unwrap_err();
        assert!(err.is_forbidden());
        assert_eq!(log.len(), 1);

        let reloaded = AuditLog::load(&path, 50).unwrap();
        assert_eq!(reloaded.entries()[0].user, "u5");

        log.clear();
        assert!(AuditLog::load(&path, 50).unwrap().is_empty());
    }
}
