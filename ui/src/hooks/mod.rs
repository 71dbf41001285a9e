//! Custom hooks.
pub mod pending;
pub mod view_scope;

// Re-exports
pub use pending::{use_pending, UsePendingHandle};
pub use view_scope::use_view_scope;
