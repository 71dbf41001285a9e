//! Form components.
pub mod submit_button;

// Re-exports
pub use submit_button::SubmitButton;
