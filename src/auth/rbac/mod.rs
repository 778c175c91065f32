//! Role-Based Access Control (RBAC) system
//!
//! The permission catalog, effective-permission resolution for presidents,
//! vice-presidents and custom roles, and the membership predicates used to
//! gate dashboard surfaces.

mod actor;
mod catalog;
mod permissions;
mod raw;
mod resolver;
mod summary;
mod types;

pub use actor::ActorDescriptor;
pub use catalog::{ALL_PERMISSIONS, all_permissions, descriptors, metadata_for, metadata_for_name};
pub use permissions::{has_all_permissions, has_any_permission, has_permission};
pub use resolver::{
    RoleKind, VICE_PRESIDENT_EXCLUDED, VICE_PRESIDENT_ROLE, president_permissions, resolve,
    vice_president_permissions,
};
pub use summary::PermissionSummary;
pub use types::{Permission, PermissionDescriptor, PermissionMetadata, PermissionSet};
