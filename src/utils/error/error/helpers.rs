//! Helper functions for creating specific error types

use super::types::ClubError;

impl ClubError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn unknown_permission<S: Into<String>>(name: S) -> Self {
        Self::UnknownPermission(name.into())
    }

    pub fn invalid_permission_set<S: Into<String>>(message: S) -> Self {
        Self::InvalidPermissionSet(message.into())
    }

    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Whether the error was caused by the caller's input rather than the deployment
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ClubError::UnknownPermission(_)
                | ClubError::InvalidPermissionSet(_)
                | ClubError::Forbidden(_)
                | ClubError::Validation(_)
                | ClubError::Serialization(_)
        )
    }
}
