//! Common test utilities for clubcentral

pub mod fixtures;

pub use fixtures::{ActorFactory, PermissionSetFactory};
