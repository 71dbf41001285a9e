//! Application components.
pub mod messages;
