//! Route functionalty.
pub mod access_gate;
pub mod routes;

// Re-exports
pub use routes::Route;
