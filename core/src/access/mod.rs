//! Access gate.
//! Decides, from the current [`Session`](crate::system::Session), which views
//! may render and which actions are offered.
pub mod action;
pub mod gate;
pub mod login_return;
pub mod navigation;
pub mod view;

// Re-exports
pub use action::{permits, Action};
pub use gate::{authorize, Decision};
pub use login_return::LoginReturn;
pub use navigation::{visible_links, NavLink};
pub use view::{Requirement, View};
