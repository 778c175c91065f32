//! RBAC type definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A named capability in the closed ClubCentral permission catalog.
///
/// Variants are declared in catalog order, so the derived `Ord` sorts
/// permissions the way the dashboard lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Create, edit and delete events
    ManageEvents,
    /// Create and assign tasks
    ManageTasks,
    /// Add and view financial transactions
    ManageFinance,
    /// Approve financial transactions
    ApproveFinance,
    /// Create and schedule social posts
    ManageSocial,
    /// View member information
    ViewMembers,
    /// Create and manage teams
    ManageTeams,
    /// Assign the vice-president and manage core members
    ManageCommittee,
    /// Create and edit custom roles
    ManageRoles,
    /// Change club settings and regenerate codes
    ManageSettings,
    /// View and approve pending member applications
    ViewApprovals,
    /// View dashboard statistics and metrics
    ViewDashboardStats,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Display metadata for a permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PermissionMetadata {
    /// Short label, e.g. "Manage Events"
    pub label: &'static str,
    /// One-line description of what the permission allows
    pub description: &'static str,
}

/// The `{id, label, description}` triple shown in permission listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PermissionDescriptor {
    /// Permission identifier
    pub id: Permission,
    /// Short label
    pub label: &'static str,
    /// Description
    pub description: &'static str,
}

/// Sparse mapping from permission to granted flag.
///
/// A permission missing from the map is not granted, exactly as if it were
/// present with `false`. There are no deny entries: the model is allow-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeMap<Permission, bool>);

impl PermissionSet {
    /// Create an empty set (nothing granted)
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a flag for a permission, returning the previous flag if any
    pub fn insert(&mut self, permission: Permission, granted: bool) -> Option<bool> {
        self.0.insert(permission, granted)
    }

    /// Builder-style [`PermissionSet::insert`]
    pub fn with(mut self, permission: Permission, granted: bool) -> Self {
        self.0.insert(permission, granted);
        self
    }

    /// The stored flag for a permission, `None` when absent
    pub fn get(&self, permission: Permission) -> Option<bool> {
        self.0.get(&permission).copied()
    }

    /// Number of entries, granted or not
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set has no entries at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over all stored entries in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (Permission, bool)> + '_ {
        self.0.iter().map(|(p, granted)| (*p, *granted))
    }

    /// Iterate over granted permissions in catalog order
    pub fn granted(&self) -> impl Iterator<Item = Permission> + '_ {
        self.iter().filter(|(_, granted)| *granted).map(|(p, _)| p)
    }

    /// Number of granted permissions
    pub fn granted_count(&self) -> usize {
        self.granted().count()
    }
}

impl FromIterator<(Permission, bool)> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = (Permission, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Collects permissions as granted entries
impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        iter.into_iter().map(|p| (p, true)).collect()
    }
}
