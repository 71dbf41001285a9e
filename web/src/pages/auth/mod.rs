//! Authentication pages.
pub mod login;
pub mod reset_password;
pub mod signup;

// Re-exports
pub use login::Login;
pub use reset_password::ResetPassword;
pub use signup::Signup;
