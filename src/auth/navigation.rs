//! Dashboard navigation gating
//!
//! Which dashboard sections an actor sees in the sidebar, and which section a
//! route belongs to.

use serde::Serialize;

use super::access::AccessRule;
use super::rbac::{Permission, PermissionSet, RoleKind};

/// A top-level dashboard section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardSection {
    Dashboard,
    PendingApprovals,
    Members,
    Teams,
    Committee,
    Roles,
    Events,
    Tasks,
    Finance,
    SocialMedia,
    Settings,
    MyPermissions,
}

impl DashboardSection {
    /// All sections in sidebar order
    pub const ALL: [DashboardSection; 12] = [
        DashboardSection::Dashboard,
        DashboardSection::PendingApprovals,
        DashboardSection::Members,
        DashboardSection::Teams,
        DashboardSection::Committee,
        DashboardSection::Roles,
        DashboardSection::Events,
        DashboardSection::Tasks,
        DashboardSection::Finance,
        DashboardSection::SocialMedia,
        DashboardSection::Settings,
        DashboardSection::MyPermissions,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardSection::Dashboard => "Dashboard",
            DashboardSection::PendingApprovals => "Pending Approvals",
            DashboardSection::Members => "Members",
            DashboardSection::Teams => "Teams",
            DashboardSection::Committee => "Committee",
            DashboardSection::Roles => "Roles",
            DashboardSection::Events => "Events",
            DashboardSection::Tasks => "Tasks",
            DashboardSection::Finance => "Finance",
            DashboardSection::SocialMedia => "Social Media",
            DashboardSection::Settings => "Settings",
            DashboardSection::MyPermissions => "My Permissions",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            DashboardSection::Dashboard => "/dashboard",
            DashboardSection::PendingApprovals => "/approvals",
            DashboardSection::Members => "/members",
            DashboardSection::Teams => "/teams",
            DashboardSection::Committee => "/committee",
            DashboardSection::Roles => "/roles",
            DashboardSection::Events => "/events",
            DashboardSection::Tasks => "/tasks",
            DashboardSection::Finance => "/finance",
            DashboardSection::SocialMedia => "/social",
            DashboardSection::Settings => "/settings",
            DashboardSection::MyPermissions => "/permissions",
        }
    }

    /// Permission rule for showing the section
    pub fn rule(&self) -> AccessRule {
        use Permission::*;

        match self {
            DashboardSection::Dashboard => AccessRule::AnyOf(&[ViewDashboardStats]),
            DashboardSection::PendingApprovals => AccessRule::AnyOf(&[ViewApprovals]),
            DashboardSection::Members => AccessRule::AnyOf(&[ViewMembers]),
            DashboardSection::Teams => AccessRule::AnyOf(&[ManageTeams, ViewMembers]),
            DashboardSection::Committee => AccessRule::AnyOf(&[ManageCommittee]),
            DashboardSection::Roles => AccessRule::AnyOf(&[ManageRoles]),
            DashboardSection::Events => AccessRule::AnyOf(&[ManageEvents]),
            DashboardSection::Tasks => AccessRule::AnyOf(&[ManageTasks]),
            DashboardSection::Finance => AccessRule::AnyOf(&[ManageFinance, ApproveFinance]),
            DashboardSection::SocialMedia => AccessRule::AnyOf(&[ManageSocial]),
            DashboardSection::Settings => AccessRule::AnyOf(&[ManageSettings]),
            // Everyone may view their own permissions
            DashboardSection::MyPermissions => AccessRule::Everyone,
        }
    }

    /// Whether the section is shown for an effective permission set
    pub fn is_visible(&self, permissions: Option<&PermissionSet>) -> bool {
        // Sections are gated by permissions only, never by role name
        self.rule().permits(RoleKind::Custom, permissions)
    }

    /// Section owning a route path. Sub-routes (`/events/42`) belong to their
    /// section.
    pub fn for_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| {
            let base = section.path();
            path == base
                || path
                    .strip_prefix(base)
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }
}

/// Sections visible for a permission set, in sidebar order
pub fn visible_sections(permissions: Option<&PermissionSet>) -> Vec<DashboardSection> {
    DashboardSection::ALL
        .into_iter()
        .filter(|section| section.is_visible(permissions))
        .collect()
}

/// Route guard: may an actor open `path`?
///
/// Paths outside the dashboard sections are not gated here.
pub fn can_access_path(permissions: Option<&PermissionSet>, path: &str) -> bool {
    DashboardSection::for_path(path).is_none_or(|section| section.is_visible(permissions))
}
