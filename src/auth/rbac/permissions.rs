//! Permission checking methods
//!
//! Every predicate accepts an absent set (`None`), which grants nothing.

use super::types::{Permission, PermissionSet};

/// Check if a set grants a specific permission.
///
/// Only an explicit `true` grants; absent entries and `false` do not.
pub fn has_permission(permissions: Option<&PermissionSet>, permission: Permission) -> bool {
    permissions.is_some_and(|set| set.get(permission) == Some(true))
}

/// Check if a set grants at least one of the listed permissions.
///
/// An empty list is never satisfied.
pub fn has_any_permission(permissions: Option<&PermissionSet>, required: &[Permission]) -> bool {
    required.iter().any(|p| has_permission(permissions, *p))
}

/// Check if a set grants every listed permission.
///
/// An empty list is always satisfied, even for an absent set. This is the
/// opposite of [`has_any_permission`] on an empty list and call sites rely on
/// the difference.
pub fn has_all_permissions(permissions: Option<&PermissionSet>, required: &[Permission]) -> bool {
    required.iter().all(|p| has_permission(permissions, *p))
}

impl PermissionSet {
    /// See [`has_permission`]
    pub fn has(&self, permission: Permission) -> bool {
        has_permission(Some(self), permission)
    }

    /// See [`has_any_permission`]
    pub fn has_any(&self, required: &[Permission]) -> bool {
        has_any_permission(Some(self), required)
    }

    /// See [`has_all_permissions`]
    pub fn has_all(&self, required: &[Permission]) -> bool {
        has_all_permissions(Some(self), required)
    }
}
