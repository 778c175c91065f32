//! Configuration data models
//!
//! This module defines all configuration structures used throughout the crate.

pub mod logging;
pub mod rbac;

// Re-export all configuration types
pub use logging::*;
pub use rbac::*;
