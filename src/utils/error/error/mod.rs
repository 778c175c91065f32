//! Error handling for ClubCentral
//!
//! This module defines all error types used throughout the crate.

mod helpers;
mod response;
mod types;

pub use response::ErrorResponse;
pub use types::{ClubError, Result};
