//! Test fixtures and data factories
//!
//! Provides factory methods for actors and permission bags as the session
//! layer would supply them.

use clubcentral::{ActorDescriptor, Permission, PermissionSet};
use serde_json::{Value, json};

/// Factory for creating test actors
pub struct ActorFactory;

impl ActorFactory {
    /// The club president, with a role string that would otherwise mean nothing
    pub fn president() -> ActorDescriptor {
        ActorDescriptor {
            is_president: true,
            role: Some("President".to_string()),
            permissions: None,
        }
    }

    pub fn vice_president() -> ActorDescriptor {
        ActorDescriptor::with_role("Vice-President", None)
    }

    /// A member with the given custom role bag
    pub fn member(permissions: PermissionSet) -> ActorDescriptor {
        ActorDescriptor::with_role("Member", Some(permissions))
    }

    /// A member whose role has no stored bag
    pub fn bare_member() -> ActorDescriptor {
        ActorDescriptor::with_role("Member", None)
    }

    /// Session payload for an actor, as JSON
    pub fn payload(is_president: bool, role: &str, permissions: Value) -> Value {
        json!({
            "isPresident": is_president,
            "role": role,
            "permissions": permissions,
        })
    }
}

/// Factory for permission bags
pub struct PermissionSetFactory;

impl PermissionSetFactory {
    /// The bag from the member scenario: events and member list
    pub fn events_and_members() -> PermissionSet {
        [Permission::ManageEvents, Permission::ViewMembers]
            .into_iter()
            .collect()
    }

    pub fn treasurer() -> PermissionSet {
        PermissionSet::new()
            .with(Permission::ManageFinance, true)
            .with(Permission::ApproveFinance, false)
            .with(Permission::ViewDashboardStats, true)
    }
}
