//! Dashboard and action gate tests

#[cfg(test)]
mod tests {
    use crate::common::{ActorFactory, PermissionSetFactory};
    use clubcentral::auth::{authorize, can_access_path, check, visible_sections};
    use clubcentral::{ClubAction, ClubError, DashboardSection, Permission, PermissionSet};

    // ==================== Navigation ====================

    #[test]
    fn test_treasurer_sidebar() {
        let actor = ActorFactory::member(PermissionSetFactory::treasurer());
        let set = actor.effective_permissions();

        assert_eq!(
            visible_sections(Some(&set)),
            vec![
                DashboardSection::Dashboard,
                DashboardSection::Finance,
                DashboardSection::MyPermissions,
            ]
        );
    }

    #[test]
    fn test_bare_member_sidebar() {
        let set = ActorFactory::bare_member().effective_permissions();
        assert_eq!(
            visible_sections(Some(&set)),
            vec![DashboardSection::MyPermissions]
        );
    }

    #[test]
    fn test_route_guard() {
        let set = ActorFactory::vice_president().effective_permissions();
        assert!(can_access_path(Some(&set), "/roles"));
        assert!(can_access_path(Some(&set), "/finance/transactions"));
        assert!(!can_access_path(Some(&set), "/settings"));
        assert!(!can_access_path(Some(&set), "/committee"));
    }

    #[test]
    fn test_teams_visible_to_member_viewers() {
        let set = PermissionSet::new().with(Permission::ViewMembers, true);
        assert!(DashboardSection::Teams.is_visible(Some(&set)));
    }

    // ==================== Actions ====================

    #[test]
    fn test_officer_actions() {
        let vp = ActorFactory::vice_president();
        for action in [
            ClubAction::ViewPendingMembers,
            ClubAction::ApproveMember,
            ClubAction::RejectMember,
            ClubAction::ApproveTransaction,
        ] {
            assert!(check(&vp, action).allowed, "{action:?}");
        }
    }

    #[test]
    fn test_president_only_actions() {
        let vp = ActorFactory::vice_president();
        let president = ActorFactory::president();
        for action in [
            ClubAction::UpdateClubSettings,
            ClubAction::RegenerateClubCode,
            ClubAction::DeleteClub,
            ClubAction::CreateRole,
            ClubAction::UpdateRole,
        ] {
            assert!(authorize(&president, action).is_ok());
            let err = authorize(&vp, action).unwrap_err();
            assert!(matches!(err, ClubError::Forbidden(_)));
            assert!(err.to_response().message.starts_with("Only president"));
        }
    }

    #[test]
    fn test_member_refused_with_access_denied() {
        let member = ActorFactory::member(PermissionSetFactory::events_and_members());
        let err = authorize(&member, ClubAction::ApproveMember).unwrap_err();
        let response = err.to_response();
        assert_eq!(response.message, "Access denied");
        assert_eq!(err.status_code(), 403);
    }
}
