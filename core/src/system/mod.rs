//! Client held authentication state.
pub mod session;
pub mod session_store;

// Reexports
pub use session::{AdminCredentials, Credentials, Session};
pub use session_store::{MemoryStorage, SessionStorage, SessionStore};
