//! Common error types.
use serde::Deserialize;
use std::result::Result as StdResult;
use thiserror::Error;

// *************
// *** Error ***
// *************

/// Failures surfaced to the views.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// No response was received from the backend.
    #[error("network error: {0}")]
    Network(String),

    /// Login rejected the email and password.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Login was rejected because the account has not been approved yet.
    #[error("account is pending approval")]
    PendingApproval,

    /// The backend rejected the session credential.
    #[error("session expired, please log in again")]
    Unauthenticated,

    /// The session is valid but lacks the privilege for the request.
    #[error("not authorized: {0}")]
    Forbidden(String),

    /// The backend rejected the submitted input.
    #[error("{0}")]
    Validation(String),

    #[error("not found")]
    NotFound,

    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("invalid response: {0}")]
    Decode(String),

    /// A protected action was attempted without a session.
    #[error("not logged in")]
    NoSession,

    /// An admin action was attempted without the admin role.
    #[error("admin role required")]
    AdminRequired,

    /// The session could not be persisted.
    #[error("could not store session: {0}")]
    Storage(String),
}

impl Error {
    /// Maps a non-success HTTP status and its body to an [`Error`].
    ///
    /// # Arguments
    /// 1. `status`: HTTP status code.
    /// 2. `body`: Raw response body, expected to be `{ "msg": string }`.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = backend_message(body);
        match status {
            400 | 422 => Self::Validation(message.unwrap_or_else(|| "invalid request".to_string())),
            401 => Self::Unauthenticated,
            403 => Self::Forbidden(message.unwrap_or_else(|| "access denied".to_string())),
            404 => Self::NotFound,
            _ => Self::Server {
                status,
                message: message.unwrap_or_else(|| "request failed".to_string()),
            },
        }
    }

    /// Maps a failed login response.
    /// Login distinguishes bad credentials from accounts awaiting approval.
    pub fn from_login_status(status: u16, body: &str) -> Self {
        match status {
            400 | 401 => Self::InvalidCredentials,
            403 => Self::PendingApproval,
            _ => Self::from_status(status, body),
        }
    }

    /// Returns whether the backend rejected the session credential.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }
}

/// Error body returned by the backend.
#[derive(Deserialize)]
struct BackendMessage {
    msg: Option<String>,
}

fn backend_message(body: &str) -> Option<String> {
    serde_json::from_str::<BackendMessage>(body)
        .ok()
        .and_then(|body| body.msg)
        .filter(|msg| !msg.trim().is_empty())
}

// **************
// *** Result ***
// **************

pub type Result<T = ()> = StdResult<T, Error>;

#[cfg(test)]
#[path = "./error_test.rs"]
mod error_test;
