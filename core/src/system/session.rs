//! Session.
use crate::types::Role;
use serde::{Deserialize, Serialize};

/// Proof of authentication issued by the backend.
///
/// Token, role and display name only ever exist together.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    /// Opaque bearer credential.
    token: String,
    role: Role,
    display_name: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>, role: Role, display_name: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            role,
            display_name: display_name.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// # Returns
    /// An [`AdminCredentials`] if the role is admin, `None` otherwise.
    pub fn as_admin(&self) -> Option<AdminCredentials> {
        self.role
            .is_admin()
            .then(|| AdminCredentials(self.clone()))
    }
}

/// [`Credentials`] verified to carry the admin role.
/// Required by every admin endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminCredentials(Credentials);

impl AdminCredentials {
    pub fn credentials(&self) -> &Credentials {
        &self.0
    }

    pub fn token(&self) -> &str {
        self.0.token()
    }
}

/// Who is currently authenticated, if anyone.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Session {
    credentials: Option<Credentials>,
}

impl Session {
    /// Session of an anonymous visitor.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(credentials: Credentials) -> Self {
        Self {
            credentials: Some(credentials),
        }
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn into_credentials(self) -> Option<Credentials> {
        self.credentials
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role().map_or(false, |role| role.is_admin())
    }

    pub fn token(&self) -> Option<&str> {
        self.credentials.as_ref().map(Credentials::token)
    }

    pub fn role(&self) -> Option<Role> {
        self.credentials.as_ref().map(Credentials::role)
    }

    pub fn display_name(&self) -> Option<&str> {
        self.credentials.as_ref().map(Credentials::display_name)
    }
}

impl From<Option<Credentials>> for Session {
    fn from(credentials: Option<Credentials>) -> Self {
        Self { credentials }
    }
}

#[cfg(test)]
#[path = "./session_test.rs"]
mod session_test;
