//! # Alumni Core
//!
//! Platform independent functionality of the KGHS alumni web application:
//! the client held [`Session`](system::Session), the access gate deciding
//! which views may render, and the client for the association's REST backend.
pub mod access;
pub mod admin;
pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod pending;
pub mod records;
pub mod scope;
pub mod system;
pub mod types;

#[cfg(test)]
pub mod dev_utils;

// Re-exports
pub use error::{Error, Result};
