//! Permission catalog
//!
//! The closed set of permissions and their display metadata. Everything here
//! is compile-time constant data.

use crate::utils::error::{ClubError, Result};
use std::str::FromStr;

use super::types::{Permission, PermissionDescriptor, PermissionMetadata};

/// All permissions, in the stable order used for listings
pub const ALL_PERMISSIONS: [Permission; 12] = [
    Permission::ManageEvents,
    Permission::ManageTasks,
    Permission::ManageFinance,
    Permission::ApproveFinance,
    Permission::ManageSocial,
    Permission::ViewMembers,
    Permission::ManageTeams,
    Permission::ManageCommittee,
    Permission::ManageRoles,
    Permission::ManageSettings,
    Permission::ViewApprovals,
    Permission::ViewDashboardStats,
];

/// All recognized permissions in catalog order
pub fn all_permissions() -> &'static [Permission] {
    &ALL_PERMISSIONS
}

/// Display metadata for a permission
pub fn metadata_for(permission: Permission) -> &'static PermissionMetadata {
    match permission {
        Permission::ManageEvents => &PermissionMetadata {
            label: "Manage Events",
            description: "Create, edit, and delete events",
        },
        Permission::ManageTasks => &PermissionMetadata {
            label: "Manage Tasks",
            description: "Create and assign tasks",
        },
        Permission::ManageFinance => &PermissionMetadata {
            label: "Manage Finance",
            description: "Add and view financial transactions",
        },
        Permission::ApproveFinance => &PermissionMetadata {
            label: "Approve Finance",
            description: "Approve financial transactions",
        },
        Permission::ManageSocial => &PermissionMetadata {
            label: "Manage Social Media",
            description: "Create and schedule social posts",
        },
        Permission::ViewMembers => &PermissionMetadata {
            label: "View Members",
            description: "View member information",
        },
        Permission::ManageTeams => &PermissionMetadata {
            label: "Manage Teams",
            description: "Create and manage teams",
        },
        Permission::ManageCommittee => &PermissionMetadata {
            label: "Manage Committee",
            description: "Assign vice-president and manage core members",
        },
        Permission::ManageRoles => &PermissionMetadata {
            label: "Manage Roles",
            description: "Create and edit custom roles",
        },
        Permission::ManageSettings => &PermissionMetadata {
            label: "Manage Settings",
            description: "Change club settings and regenerate codes",
        },
        Permission::ViewApprovals => &PermissionMetadata {
            label: "View Approvals",
            description: "View and approve pending member applications",
        },
        Permission::ViewDashboardStats => &PermissionMetadata {
            label: "View Dashboard Stats",
            description: "View dashboard statistics and metrics",
        },
    }
}

/// Display metadata for a permission given by its wire name.
///
/// Fails with [`ClubError::UnknownPermission`] for names outside the catalog.
pub fn metadata_for_name(name: &str) -> Result<&'static PermissionMetadata> {
    Ok(metadata_for(name.parse()?))
}

/// `{id, label, description}` for every permission in catalog order
pub fn descriptors() -> Vec<PermissionDescriptor> {
    ALL_PERMISSIONS.iter().map(|p| p.descriptor()).collect()
}

impl Permission {
    /// Every permission in catalog order
    pub const ALL: [Permission; 12] = ALL_PERMISSIONS;

    /// Wire name, e.g. `"manage_events"`
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ManageEvents => "manage_events",
            Permission::ManageTasks => "manage_tasks",
            Permission::ManageFinance => "manage_finance",
            Permission::ApproveFinance => "approve_finance",
            Permission::ManageSocial => "manage_social",
            Permission::ViewMembers => "view_members",
            Permission::ManageTeams => "manage_teams",
            Permission::ManageCommittee => "manage_committee",
            Permission::ManageRoles => "manage_roles",
            Permission::ManageSettings => "manage_settings",
            Permission::ViewApprovals => "view_approvals",
            Permission::ViewDashboardStats => "view_dashboard_stats",
        }
    }

    pub fn metadata(&self) -> &'static PermissionMetadata {
        metadata_for(*self)
    }

    pub fn descriptor(&self) -> PermissionDescriptor {
        let metadata = self.metadata();
        PermissionDescriptor {
            id: *self,
            label: metadata.label,
            description: metadata.description,
        }
    }
}

impl FromStr for Permission {
    type Err = ClubError;

    fn from_str(s: &str) -> Result<Self> {
        ALL_PERMISSIONS
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ClubError::unknown_permission(s))
    }
}
