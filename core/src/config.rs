//! Client configuration.
use crate::constants::DEFAULT_API_URL;

/// Configuration for reaching the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Backend origin, without a trailing slash.
    base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let base_url = base_url.trim().trim_end_matches('/');
        let base_url = if base_url.is_empty() {
            DEFAULT_API_URL
        } else {
            base_url
        };

        Self {
            base_url: base_url.to_string(),
        }
    }

    /// Creates a config from an optional value,
    /// typically `option_env!("ALUMNI_API_URL")`.
    pub fn from_env_value(value: Option<&str>) -> Self {
        Self::new(value.unwrap_or(DEFAULT_API_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute url for an api path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
#[path = "./config_test.rs"]
mod config_test;
