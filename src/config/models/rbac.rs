//! RBAC configuration

use serde::{Deserialize, Serialize};

/// RBAC configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Reject custom-role permission bags that name permissions outside the
    /// catalog instead of skipping those keys
    #[serde(default)]
    pub strict_permission_keys: bool,
}

impl RbacConfig {
    /// Merge RBAC configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.strict_permission_keys {
            self.strict_permission_keys = other.strict_permission_keys;
        }
        self
    }
}
