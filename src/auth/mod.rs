//! Authorization for club dashboards
//!
//! - [`rbac`]: permission catalog, effective-permission resolution and checks
//! - [`navigation`]: which dashboard sections an actor may open
//! - [`guard`]: privileged server actions and their gates

pub mod access;
pub mod guard;
pub mod navigation;
pub mod rbac;

pub use access::AccessRule;
pub use guard::{AccessDecision, ClubAction, authorize, check};
pub use navigation::{DashboardSection, can_access_path, visible_sections};
pub use rbac::{
    ActorDescriptor, Permission, PermissionDescriptor, PermissionMetadata, PermissionSet,
    PermissionSummary, RoleKind,
};
