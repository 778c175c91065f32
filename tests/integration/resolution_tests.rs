//! Effective permission resolution tests
//!
//! Resolution and checks through the public API, starting from session
//! payloads where the session layer would.

#[cfg(test)]
mod tests {
    use crate::common::{ActorFactory, PermissionSetFactory};
    use clubcentral::{
        ALL_PERMISSIONS, ActorDescriptor, Permission, PermissionSet, PermissionSummary, RoleKind,
        has_all_permissions, has_any_permission, has_permission, resolve,
    };
    use serde_json::json;

    // ==================== Derivation Rules ====================

    /// Presidency wins over any role string and any custom bag
    #[test]
    fn test_president_override() {
        let custom_bags = [
            None,
            Some(PermissionSet::new()),
            Some(PermissionSetFactory::treasurer()),
        ];
        for role in ["Member", "Vice-President", "", "President"] {
            for custom in custom_bags.clone() {
                let set = resolve(true, role, custom);
                for permission in ALL_PERMISSIONS {
                    assert!(has_permission(Some(&set), permission));
                }
            }
        }
    }

    /// Vice-presidents get ten permissions, never settings or committee
    #[test]
    fn test_vice_president_derivation() {
        let set = ActorFactory::vice_president().effective_permissions();

        assert!(!has_permission(Some(&set), Permission::ManageSettings));
        assert!(!has_permission(Some(&set), Permission::ManageCommittee));
        let granted: Vec<Permission> = set.granted().collect();
        assert_eq!(granted.len(), 10);
        assert!(granted.contains(&Permission::ApproveFinance));
        assert!(granted.contains(&Permission::ManageRoles));
    }

    /// Custom roles are returned exactly as stored
    #[test]
    fn test_custom_role_identity() {
        let bag = PermissionSetFactory::treasurer();
        for role in ["Treasurer", "Council Head", "vice-president"] {
            assert_eq!(resolve(false, role, Some(bag.clone())), bag);
            assert_eq!(resolve(false, role, None), PermissionSet::new());
        }
    }

    /// The member scenario end to end
    #[test]
    fn test_member_scenario() {
        let actor = ActorFactory::member(PermissionSetFactory::events_and_members());
        assert_eq!(actor.role_kind(), RoleKind::Custom);

        let set = actor.effective_permissions();
        assert_eq!(
            serde_json::to_value(&set).unwrap(),
            json!({ "manage_events": true, "view_members": true })
        );
        assert!(has_all_permissions(
            Some(&set),
            &[Permission::ManageEvents, Permission::ViewMembers]
        ));
        assert!(!has_all_permissions(
            Some(&set),
            &[Permission::ManageEvents, Permission::ManageFinance]
        ));
        assert!(has_any_permission(
            Some(&set),
            &[Permission::ManageFinance, Permission::ViewMembers]
        ));
    }

    /// Explicit false entries are kept but do not grant
    #[test]
    fn test_treasurer_explicit_false() {
        let set = resolve(false, "Treasurer", Some(PermissionSetFactory::treasurer()));
        assert_eq!(set.get(Permission::ApproveFinance), Some(false));
        assert!(!set.has(Permission::ApproveFinance));
        assert!(set.has(Permission::ManageFinance));
    }

    // ==================== Empty Queries ====================

    /// Any-of over nothing is false, all-of over nothing is true
    #[test]
    fn test_vacuous_queries() {
        let sets = [
            None,
            Some(PermissionSet::new()),
            Some(resolve(true, "", None)),
        ];
        for set in &sets {
            assert!(!has_any_permission(set.as_ref(), &[]));
            assert!(has_all_permissions(set.as_ref(), &[]));
        }
    }

    // ==================== Session Payloads ====================

    /// Loosely typed flags from storage never grant
    #[test]
    fn test_session_payload_with_loose_values() {
        let payload = ActorFactory::payload(
            false,
            "Member",
            json!({
                "manage_events": true,
                "manage_tasks": "true",
                "view_members": 1,
                "retired_permission": true,
            }),
        );
        let actor: ActorDescriptor = serde_json::from_value(payload).unwrap();
        let set = actor.into_effective_permissions();

        assert_eq!(set.granted().collect::<Vec<_>>(), vec![Permission::ManageEvents]);
    }

    /// A president payload ignores the stored bag
    #[test]
    fn test_session_payload_president() {
        let payload = ActorFactory::payload(true, "Member", json!({}));
        let actor: ActorDescriptor = serde_json::from_value(payload).unwrap();
        assert_eq!(actor.effective_permissions().granted_count(), 12);
    }

    /// A bag that is not an object is rejected
    #[test]
    fn test_session_payload_invalid_bag() {
        let payload = ActorFactory::payload(false, "Member", json!("manage_events"));
        let result: Result<ActorDescriptor, _> = serde_json::from_value(payload);
        assert!(result.is_err());
    }

    // ==================== Summary ====================

    #[test]
    fn test_summary_serialization() {
        let set = ActorFactory::bare_member().effective_permissions();
        let summary = serde_json::to_value(PermissionSummary::for_set(Some(&set))).unwrap();

        assert_eq!(summary["granted"], json!([]));
        assert_eq!(summary["denied"].as_array().unwrap().len(), 12);
        assert_eq!(
            summary["denied"][0],
            json!({
                "id": "manage_events",
                "label": "Manage Events",
                "description": "Create, edit, and delete events",
            })
        );
    }
}
