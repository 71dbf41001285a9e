//! Components and hooks shared by the alumni web application.
pub mod components;
pub mod error;
pub mod hooks;
pub mod types;
pub mod widgets;

// Re-exports
pub use error::{Error, Result};
