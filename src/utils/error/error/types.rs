//! Error types for ClubCentral

use thiserror::Error;

/// Result type alias for ClubCentral
pub type Result<T> = std::result::Result<T, ClubError>;

/// Main error type for ClubCentral
#[derive(Error, Debug)]
pub enum ClubError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A permission identifier outside the closed catalog
    #[error("Unknown permission: {0}")]
    UnknownPermission(String),

    /// A raw permission bag that is not a JSON object
    #[error("Invalid permission set: {0}")]
    InvalidPermissionSet(String),

    /// The actor may not perform the requested action
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
