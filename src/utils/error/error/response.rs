//! HTTP-facing representation of errors
//!
//! The HTTP layer is not part of this crate, but callers that surface a
//! [`ClubError`] to a browser need a status code and the `{ "message": ... }`
//! body the dashboard expects.

use super::types::ClubError;
use serde::{Deserialize, Serialize};

/// JSON error body returned to dashboard clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub message: String,
    /// Stable machine-readable code
    pub code: String,
}

impl ClubError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ClubError::Forbidden(_) => 403,
            ClubError::UnknownPermission(_)
            | ClubError::InvalidPermissionSet(_)
            | ClubError::Validation(_)
            | ClubError::Serialization(_) => 400,
            ClubError::Config(_) | ClubError::Yaml(_) | ClubError::Io(_) => 500,
        }
    }

    /// Stable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ClubError::Config(_) => "CONFIG_ERROR",
            ClubError::UnknownPermission(_) => "UNKNOWN_PERMISSION",
            ClubError::InvalidPermissionSet(_) => "INVALID_PERMISSION_SET",
            ClubError::Forbidden(_) => "FORBIDDEN",
            ClubError::Validation(_) => "VALIDATION_ERROR",
            ClubError::Serialization(_) => "SERIALIZATION_ERROR",
            ClubError::Yaml(_) => "CONFIG_ERROR",
            ClubError::Io(_) => "IO_ERROR",
        }
    }

    /// Build the response body for this error.
    ///
    /// Forbidden errors carry the bare message ("Access denied"), matching
    /// what the dashboard shows; server-side failures are not echoed.
    pub fn to_response(&self) -> ErrorResponse {
        let message = match self {
            ClubError::Forbidden(msg) => msg.clone(),
            ClubError::Config(_) | ClubError::Yaml(_) | ClubError::Io(_) => {
                "Server error".to_string()
            }
            other => other.to_string(),
        };

        ErrorResponse {
            message,
            code: self.error_code().to_string(),
        }
    }
}
