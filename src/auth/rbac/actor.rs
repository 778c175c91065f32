//! Actor descriptors supplied by the session layer

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::resolver::{RoleKind, resolve};
use super::types::PermissionSet;
use crate::config::RbacConfig;
use crate::utils::error::Result;

/// The identity facts needed to derive an actor's permissions.
///
/// Deserializes from the session payload
/// (`{"isPresident": false, "role": "Treasurer", "permissions": {...}}`).
/// `role` and `permissions` may be missing; the permission bag is parsed
/// leniently, see [`PermissionSet::from_raw`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorDescriptor {
    /// Whether the actor is the club president
    #[serde(default)]
    pub is_president: bool,
    /// Role name, e.g. "Vice-President", "Council Head", "Member"
    #[serde(default)]
    pub role: Option<String>,
    /// Stored permission bag of the actor's custom role
    #[serde(default, deserialize_with = "deserialize_raw_permissions")]
    pub permissions: Option<PermissionSet>,
}

impl ActorDescriptor {
    pub fn president() -> Self {
        Self {
            is_president: true,
            ..Self::default()
        }
    }

    pub fn with_role(role: impl Into<String>, permissions: Option<PermissionSet>) -> Self {
        Self {
            is_president: false,
            role: Some(role.into()),
            permissions,
        }
    }

    /// Parse a session payload, applying `config` to the permission bag.
    ///
    /// Plain deserialization always skips unknown permission keys; this
    /// rejects them when `strict_permission_keys` is set.
    pub fn from_value_with(mut value: Value, config: &RbacConfig) -> Result<Self> {
        let raw = match value.as_object_mut() {
            Some(object) => object.remove("permissions"),
            None => None,
        };
        let mut actor: Self = serde_json::from_value(value)?;
        actor.permissions = match raw {
            None | Some(Value::Null) => None,
            Some(raw) => Some(PermissionSet::from_raw_with(&raw, config)?),
        };
        Ok(actor)
    }

    /// Role name, empty when absent
    pub fn role(&self) -> &str {
        self.role.as_deref().unwrap_or_default()
    }

    pub fn role_kind(&self) -> RoleKind {
        RoleKind::classify(self.is_president, self.role())
    }

    /// Resolve the effective permission set, leaving the descriptor intact
    pub fn effective_permissions(&self) -> PermissionSet {
        resolve(self.is_president, self.role(), self.permissions.clone())
    }

    /// Resolve the effective permission set, consuming the descriptor
    pub fn into_effective_permissions(self) -> PermissionSet {
        let role = self.role.unwrap_or_default();
        resolve(self.is_president, &role, self.permissions)
    }
}

fn deserialize_raw_permissions<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<PermissionSet>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    PermissionSet::from_raw(&value)
        .map(Some)
        .map_err(serde::de::Error::custom)
}
