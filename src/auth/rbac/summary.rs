//! Granted/denied breakdown for the "My Permissions" view

use serde::Serialize;

use super::catalog::ALL_PERMISSIONS;
use super::permissions::has_permission;
use super::types::{Permission, PermissionDescriptor, PermissionSet};

/// The catalog split into what a set grants and what it does not
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionSummary {
    /// Granted permissions in catalog order
    pub granted: Vec<PermissionDescriptor>,
    /// Everything else, in catalog order
    pub denied: Vec<PermissionDescriptor>,
}

impl PermissionSummary {
    pub fn for_set(permissions: Option<&PermissionSet>) -> Self {
        let (granted, denied): (Vec<Permission>, Vec<Permission>) = ALL_PERMISSIONS
            .iter()
            .copied()
            .partition(|p| has_permission(permissions, *p));

        Self {
            granted: granted.into_iter().map(|p| p.descriptor()).collect(),
            denied: denied.into_iter().map(|p| p.descriptor()).collect(),
        }
    }
}
