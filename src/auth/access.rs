//! Access rules shared by navigation and action gates

use serde::Serialize;

use super::rbac::{Permission, PermissionSet, RoleKind, has_any_permission};

/// What an actor needs to reach a surface or perform an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "permissions", rename_all = "snake_case")]
pub enum AccessRule {
    /// Open to every authenticated member
    Everyone,
    /// Granted when the effective set holds at least one of these
    AnyOf(&'static [Permission]),
    /// President or vice-president
    Officer,
    /// President only
    PresidentOnly,
}

impl AccessRule {
    /// Evaluate the rule for an actor's role kind and effective set
    pub fn permits(&self, kind: RoleKind, permissions: Option<&PermissionSet>) -> bool {
        match self {
            AccessRule::Everyone => true,
            AccessRule::AnyOf(required) => has_any_permission(permissions, required),
            AccessRule::Officer => matches!(kind, RoleKind::President | RoleKind::VicePresident),
            AccessRule::PresidentOnly => kind == RoleKind::President,
        }
    }
}
