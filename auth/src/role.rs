//! User roles.
//!
//! DESIGN
//! ======
//! The backend sends roles as plain strings. Anything outside the three known
//! roles decodes to `Unknown` carrying the raw value, so an unfamiliar role is
//! an explicit match arm everywhere instead of a lookup miss, and a persisted
//! session re-encodes to exactly what was stored.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::routes::{ADMIN_DASHBOARD_ROUTE, OWNER_DASHBOARD_ROUTE, STORES_ROUTE};

/// Authorization role attached to every user.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Regular user: browses stores and submits ratings.
    User,
    /// Administrator: manages users and stores.
    Admin,
    /// Store owner: views ratings for owned stores.
    StoreOwner,
    /// Any role string this client does not recognize.
    Unknown(String),
}

impl Role {
    /// Every role this client recognizes.
    pub const KNOWN: &'static [Role] = &[Role::User, Role::Admin, Role::StoreOwner];

    /// Wire name of the role.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::StoreOwner => "store_owner",
            Self::Unknown(raw) => raw,
        }
    }

    /// Landing route after login, and the fallback when a guarded route
    /// refuses this role.
    #[must_use]
    pub fn home_route(&self) -> &'static str {
        match self {
            Self::Admin => ADMIN_DASHBOARD_ROUTE,
            Self::StoreOwner => OWNER_DASHBOARD_ROUTE,
            Self::User | Self::Unknown(_) => STORES_ROUTE,
        }
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "user" => Self::User,
            "admin" => Self::Admin,
            "store_owner" => Self::StoreOwner,
            _ => Self::Unknown(raw),
        }
    }
}

impl From<&str> for Role {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_owned())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Unknown(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
