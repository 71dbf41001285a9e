//! Member roles.
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Role of an authenticated member.
#[derive(Serialize, Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Alumni,
    Admin,
}

impl Role {
    /// Parses a role as reported by the backend.
    /// Anything other than `admin` is treated as `alumni`.
    pub fn parse(role: &str) -> Self {
        if role.trim().eq_ignore_ascii_case("admin") {
            Self::Admin
        } else {
            Self::Alumni
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// The other role.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Alumni => Self::Admin,
            Self::Admin => Self::Alumni,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alumni => "alumni",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let role = Option::<String>::deserialize(deserializer)?;
        Ok(role.as_deref().map(Role::parse).unwrap_or_default())
    }
}

#[cfg(test)]
#[path = "./role_test.rs"]
mod role_test;
