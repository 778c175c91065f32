//! Effective permission resolution

use serde::Serialize;
use tracing::debug;

use super::catalog::ALL_PERMISSIONS;
use super::types::{Permission, PermissionSet};

/// Role name that receives vice-president permissions (exact, case-sensitive)
pub const VICE_PRESIDENT_ROLE: &str = "Vice-President";

/// Permissions a vice-president never holds
pub const VICE_PRESIDENT_EXCLUDED: [Permission; 2] =
    [Permission::ManageSettings, Permission::ManageCommittee];

/// Which derivation rule applies to an actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleKind {
    /// Club president: every permission
    President,
    /// Vice-president: everything except settings and committee changes
    VicePresident,
    /// Any other role: its stored permission bag, nothing implied
    Custom,
}

impl RoleKind {
    /// Classify an actor. Presidency wins over whatever the role string says.
    pub fn classify(is_president: bool, role: &str) -> Self {
        if is_president {
            RoleKind::President
        } else if role == VICE_PRESIDENT_ROLE {
            RoleKind::VicePresident
        } else {
            RoleKind::Custom
        }
    }
}

/// Every catalog permission granted
pub fn president_permissions() -> PermissionSet {
    ALL_PERMISSIONS.iter().copied().collect()
}

/// Every catalog permission except [`VICE_PRESIDENT_EXCLUDED`], which stay absent
pub fn vice_president_permissions() -> PermissionSet {
    ALL_PERMISSIONS
        .iter()
        .copied()
        .filter(|p| !VICE_PRESIDENT_EXCLUDED.contains(p))
        .collect()
}

/// Compute the effective permission set for an actor.
///
/// Strict ordered decision: president, then vice-president, then the custom
/// role's bag returned verbatim (or an empty set when there is none). Custom
/// roles inherit nothing.
pub fn resolve(
    is_president: bool,
    role: &str,
    custom_role_permissions: Option<PermissionSet>,
) -> PermissionSet {
    let kind = RoleKind::classify(is_president, role);
    let permissions = match kind {
        RoleKind::President => president_permissions(),
        RoleKind::VicePresident => vice_president_permissions(),
        RoleKind::Custom => custom_role_permissions.unwrap_or_default(),
    };

    debug!(
        "Resolved {:?} permissions for role '{}': {} granted",
        kind,
        role,
        permissions.granted_count()
    );
    permissions
}
