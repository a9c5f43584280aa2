//! Caller roles
//!
//! Roles are ordered: a higher role holds every capability of a lower one.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    User,
    Admin,
    SuperAdmin,
}

impl UserRole {
    /// General administration: generate, validate and preview steps
    pub fn can_generate(self) -> bool {
        self >= UserRole::Admin
    }

    /// Read and change provider configuration
    pub fn can_manage_config(self) -> bool {
        self >= UserRole::SuperAdmin
    }

    /// Parse a role, treating anything unrecognised as a plain user
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for UserRole {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "user" => Ok(UserRole::User),
            "admin" => Ok(UserRole::Admin),
            "super_admin" | "superadmin" => Ok(UserRole::SuperAdmin),
            other => Err(CoreError::Forbidden(format!("unknown role '{}'", other))),
        }
    }
}
