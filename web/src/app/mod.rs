//! Main application.
pub mod app;
pub mod app_state;
pub mod auth_state;

// Re-exports
pub use app::App;
pub use app_state::{AppStateAction, AppStateReducer};
pub use auth_state::{AuthStateAction, AuthStateReducer};
