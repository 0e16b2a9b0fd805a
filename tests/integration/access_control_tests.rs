//! Access control integration tests
//!
//! Decisions evaluated over the standard fixtures and over data sources
//! loaded from files.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{self, DocumentFactory, UserFactory};
    use kmrl_access::config::DataConfig;
    use kmrl_access::{
        AccessContext, AccessControl, Action, Category, DataSources, DocumentStore,
        UserDirectory, UserRole, has_permission_named,
    };
    use std::sync::Arc;
    use std::thread;
    use tempfile::tempdir;

    fn ids(documents: Vec<kmrl_access::Document>) -> Vec<String> {
        documents.into_iter().map(|d| d.id).collect()
    }

    // ==================== Dashboard Views ====================

    #[test]
    fn test_visible_documents_per_role() {
        let acl = fixtures::access_control();
        let store = fixtures::document_store();

        assert_eq!(acl.visible_documents(&UserFactory::admin(), &store).len(), 6);
        assert_eq!(
            ids(acl.visible_documents(&UserFactory::operations_manager(), &store)),
            vec!["metro-maintenance", "safety-audit", "depot-roster"]
        );
        assert_eq!(
            ids(acl.visible_documents(&UserFactory::finance_manager(), &store)),
            vec!["budget-q3", "tender-notice"]
        );
        assert_eq!(
            ids(acl.visible_documents(&UserFactory::operations_staff(), &store)),
            vec!["metro-maintenance", "safety-audit"]
        );
        assert_eq!(
            ids(acl.visible_documents(&UserFactory::finance_staff(), &store)),
            vec!["budget-q3", "tender-notice"]
        );
        assert!(
            acl.visible_documents(&UserFactory::random_staff(), &store)
                .is_empty()
        );
    }

    #[test]
    fn test_approval_queues() {
        let acl = fixtures::access_control();
        let store = fixtures::document_store();

        assert_eq!(
            ids(acl.approval_queue(&UserFactory::admin(), &store)),
            vec!["metro-maintenance", "budget-q3", "tender-notice", "vendor-contract"]
        );
        assert_eq!(
            ids(acl.approval_queue(&UserFactory::operations_manager(), &store)),
            vec!["metro-maintenance"]
        );
        assert_eq!(
            ids(acl.approval_queue(&UserFactory::finance_manager(), &store)),
            vec!["budget-q3", "tender-notice"]
        );
        assert!(
            acl.approval_queue(&UserFactory::operations_staff(), &store)
                .is_empty()
        );
    }

    #[test]
    fn test_filter_visible_matches_predicate() {
        let acl = fixtures::access_control();
        let documents = DocumentFactory::catalogue();

        for user in UserFactory::all() {
            let expected: Vec<&str> = documents
                .iter()
                .filter(|d| acl.can_access_document(&user, d))
                .map(|d| d.id.as_str())
                .collect();
            let actual: Vec<&str> = acl
                .filter_visible(&user, &documents)
                .into_iter()
                .map(|d| d.id.as_str())
                .collect();
            assert_eq!(actual, expected, "{}", user.name);
        }
    }

    #[test]
    fn test_staff_action_matrix() {
        let acl = fixtures::access_control();
        let sarah = UserFactory::operations_staff();
        let own = DocumentFactory::by("Sarah");
        let colleague = DocumentFactory::by("Rahul");

        let allowed: Vec<Action> = Action::ALL
            .into_iter()
            .filter(|a| acl.can_perform_document_action(UserRole::Staff, *a, &own, &sarah))
            .collect();
        assert_eq!(allowed, vec![Action::View, Action::Edit, Action::Download]);

        assert!(
            Action::ALL
                .into_iter()
                .all(|a| !acl.can_perform_document_action(UserRole::Staff, a, &colleague, &sarah))
        );
    }

    #[test]
    fn test_string_entry_points_fail_closed() {
        let acl = fixtures::access_control();
        let document = DocumentFactory::by("Sarah");
        let sarah = UserFactory::operations_staff();

        assert!(acl.can_perform_named("staff", "view", Some(&document), Some(&sarah)));
        assert!(!acl.can_perform_named("guest", "view", Some(&document), Some(&sarah)));
        assert!(!acl.can_perform_named("staff", "archive", Some(&document), Some(&sarah)));
        assert!(!acl.can_perform_named("staff", "view", None, None));

        assert!(has_permission_named("manager", "documents", "approve"));
        assert!(!has_permission_named("manager", "documents", "delete"));
        assert!(!has_permission_named("auditor", "documents", "view"));
    }

    #[test]
    fn test_role_dashboards_from_policy() {
        let acl = fixtures::access_control();
        let grants = acl.policy().grants(UserRole::Manager);

        assert!(grants[&Category::System].is_empty());
        assert_eq!(grants[&Category::Documents], vec!["approve", "reject", "view_department"]);
        assert!(acl.has_permission(UserRole::Admin, Category::System, "restore"));
    }

    // ==================== Shared Use ====================

    #[test]
    fn test_concurrent_checks_share_audit_log() {
        let acl = Arc::new(fixtures::access_control());
        let document = DocumentFactory::with_id("d1", "Sarah");

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let acl = Arc::clone(&acl);
                let document = document.clone();
                thread::spawn(move || {
                    let ctx = AccessContext::new(UserFactory::finance_staff());
                    for _ in 0..50 {
                        assert!(!acl.check(&ctx, Action::View, &document).granted);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(acl.audit_log().len(), 400);
        assert_eq!(acl.audit_log().for_user("u5").len(), 400);
    }

    // ==================== Loaded Data ====================

    #[tokio::test]
    async fn test_decisions_over_loaded_files() {
        let dir = tempdir().unwrap();
        let users_path = fixtures::write_file(
            dir.path(),
            "users.json",
            r#"[
                {"id": "u1", "name": "Asha", "role": "admin"},
                {"id": "u2", "name": "Rahul", "role": "manager", "department": "Operations"},
                {"id": "u3", "name": "Sarah", "role": "staff", "department": "Operations"},
                {"name": "Legacy", "role": "staff", "department": "Finance"}
            ]"#,
        );
        let documents_path = fixtures::write_file(
            dir.path(),
            "documents.yaml",
            r#"
- id: d1
  uploadedBy: Sarah
  status: pending
- id: d2
  uploaded_by:
    id: u3
  status: under_review
- id: d3
  uploadedBy: Legacy
- id: d4
  uploaded_by:
    name: u3
"#,
        );

        let sources = DataSources::load(&DataConfig {
            users_path: Some(users_path),
            documents_path: Some(documents_path),
        })
        .await
        .unwrap();

        assert_eq!(sources.users.len(), 4);
        assert_eq!(sources.documents.len(), 4);

        let acl = AccessControl::new(sources.users.clone());
        let rahul = sources.users.find_user("Rahul").unwrap();
        let sarah = sources.users.find_user("u3").unwrap();

        assert_eq!(
            ids(acl.visible_documents(&rahul, &*sources.documents)),
            vec!["d1", "d2"]
        );
        // d4 names a user called "u3", who does not exist
        assert_eq!(
            ids(acl.visible_documents(&sarah, &*sources.documents)),
            vec!["d1", "d2"]
        );
        assert_eq!(
            ids(acl.approval_queue(&rahul, &*sources.documents)),
            vec!["d1", "d2"]
        );

        let d3 = sources.documents.get("d3").unwrap();
        let legacy = sources.users.find_user("Legacy").unwrap();
        assert!(acl.can_access_document(&legacy, &d3));
        assert!(!acl.can_access_document(&rahul, &d3));
    }

    #[tokio::test]
    async fn test_unknown_role_in_users_file_is_rejected() {
        let dir = tempdir().unwrap();
        let users_path = fixtures::write_file(
            dir.path(),
            "users.yaml",
            "- name: Intruder\n  role: superuser\n",
        );

        let result = DataSources::load(&DataConfig {
            users_path: Some(users_path),
            documents_path: None,
        })
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_missing_data_file_is_not_found() {
        let dir = tempdir().unwrap();

        let err = DataSources::load(&DataConfig {
            users_path: Some(dir.path().join("absent.yaml")),
            documents_path: None,
        })
        .await
        .err()
        .unwrap();

        assert!(matches!(err, kmrl_access::AccessError::NotFound(_)));
    }
}
