//! # ClubCentral
//!
//! Authorization core for ClubCentral club dashboards.
//!
//! ## Features
//!
//! - **Permission catalog**: the twelve club capabilities with display metadata
//! - **Resolution**: effective permissions for presidents, vice-presidents and custom roles
//! - **Checks**: point, any-of and all-of queries over a resolved set
//! - **Gates**: dashboard section visibility and privileged server actions
//!
//! ## Quick Start
//!
//! ```rust
//! use clubcentral::{Permission, PermissionSet, has_all_permissions, resolve};
//!
//! let bag = PermissionSet::new()
//!     .with(Permission::ManageEvents, true)
//!     .with(Permission::ViewMembers, true);
//!
//! let effective = resolve(false, "Member", Some(bag));
//! assert!(has_all_permissions(
//!     Some(&effective),
//!     &[Permission::ManageEvents, Permission::ViewMembers],
//! ));
//!
//! let president = resolve(true, "Member", None);
//! assert_eq!(president.granted_count(), 12);
//! ```

#![warn(clippy::all)]

pub mod auth;
pub mod config;
pub mod utils;

// Re-export main types
pub use auth::rbac::{
    ALL_PERMISSIONS, all_permissions, descriptors, has_all_permissions, has_any_permission,
    has_permission, metadata_for, metadata_for_name, resolve,
};
pub use auth::{
    AccessDecision, AccessRule, ActorDescriptor, ClubAction, DashboardSection, Permission,
    PermissionDescriptor, PermissionMetadata, PermissionSet, PermissionSummary, RoleKind,
};
pub use config::Config;
pub use utils::error::{ClubError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git commit the binary was built from
pub const GIT_HASH: &str = env!("GIT_HASH");
