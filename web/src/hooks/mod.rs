//! Custom hooks.
pub mod api;
pub mod error_reporter;
pub mod load;
pub mod session;

// Re-exports
pub use api::{use_api, Api};
pub use error_reporter::{use_error_reporter, ErrorReporter};
pub use load::{member_deps, use_load, use_member_load, Loadable};
pub use session::{use_auth_state, use_session};
