//! Parsing of untyped permission bags
//!
//! Custom roles store their permissions as a JSON object. Those objects are
//! edited through the dashboard and can carry stale keys or values that are
//! not booleans, so they are parsed here instead of through serde directly.

use serde_json::Value;
use tracing::warn;

use super::types::{Permission, PermissionSet};
use crate::config::RbacConfig;
use crate::utils::error::{ClubError, Result};

impl PermissionSet {
    /// Parse a raw permission bag, ignoring unknown keys.
    ///
    /// `null` yields an empty set. Only a literal JSON `true` grants; any
    /// other value is recorded as `false`.
    pub fn from_raw(value: &Value) -> Result<Self> {
        Self::from_raw_with(value, &RbacConfig::default())
    }

    /// Parse a raw permission bag according to `config`.
    ///
    /// With `strict_permission_keys` set, a key outside the catalog fails
    /// with [`ClubError::UnknownPermission`] instead of being skipped.
    pub fn from_raw_with(value: &Value, config: &RbacConfig) -> Result<Self> {
        let object = match value {
            Value::Null => return Ok(Self::new()),
            Value::Object(object) => object,
            other => {
                return Err(ClubError::invalid_permission_set(format!(
                    "expected an object, got {}",
                    json_kind(other)
                )));
            }
        };

        let mut permissions = Self::new();
        for (key, flag) in object {
            match key.parse::<Permission>() {
                Ok(permission) => {
                    permissions.insert(permission, matches!(flag, Value::Bool(true)));
                }
                Err(err) if config.strict_permission_keys => return Err(err),
                Err(_) => warn!("Ignoring unknown permission key '{}'", key),
            }
        }

        Ok(permissions)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
