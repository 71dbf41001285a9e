//! Where to continue after logging in.
use serde::{Deserialize, Serialize};

/// Query carried by the login view.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginReturn {
    /// Path, with query, of the view that asked for a login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl LoginReturn {
    pub fn to(next: impl Into<String>) -> Self {
        Self {
            next: Some(next.into()),
        }
    }

    /// Return to the given location.
    ///
    /// # Arguments
    /// + `path`: Location path.
    /// + `query`: Location query, with or without the leading `?`.
    pub fn from_location(path: &str, query: &str) -> Self {
        let query = query.trim_start_matches('?');
        if query.is_empty() {
            Self::to(path)
        } else {
            Self::to(format!("{path}?{query}"))
        }
    }

    /// # Returns
    /// The path to continue to, or `None` if there is none
    /// or it does not stay within the application.
    pub fn target(&self) -> Option<&str> {
        let next = self.next.as_deref()?.trim();
        let local = next.starts_with('/') && !next.starts_with("//") && !next.contains('\\');
        local.then_some(next)
    }
}

#[cfg(test)]
#[path = "./login_return_test.rs"]
mod login_return_test;
