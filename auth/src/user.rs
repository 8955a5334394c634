//! User and session records shared by the login RPC and session storage.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::role::Role;

/// A user as returned by the login endpoint.
///
/// Password material never reaches the client; the backend omits it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend identifier. Numeric ids are accepted and held as strings.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Authorization role.
    pub role: Role,
    /// Postal address, when the backend records one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// An authentication token paired with the user it authenticates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token issued by the backend.
    pub token: String,
    pub user: User,
}

impl Session {
    #[must_use]
    pub fn new(user: User, token: impl Into<String>) -> Self {
        Self { token: token.into(), user }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) if number.is_i64() || number.is_u64() => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or integer id")),
    }
}
