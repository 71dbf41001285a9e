//! Client for the association's REST backend.
//!
//! Every endpoint is a method on [`ApiClient`], grouped by concern.
//! Protected endpoints take the [`Credentials`](crate::system::Credentials) to attach,
//! admin endpoints an [`AdminCredentials`](crate::system::AdminCredentials).
pub mod admin;
pub mod auth;
pub mod client;
pub mod directory;
pub mod donations;
pub mod events;
pub mod forums;
pub mod gallery;
pub mod http;
pub mod news;
pub mod profile;
pub mod transport;

// Re-exports
pub use client::ApiClient;
pub use http::HttpTransport;
pub use transport::{Body, FilePart, FormField, Method, Request, Response, Transport};

#[cfg(test)]
#[path = "./client_test.rs"]
mod client_test;
