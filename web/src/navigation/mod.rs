//! Navigation resources and functionality.
pub mod navbar;

// Re-exports
pub use navbar::Navbar;
