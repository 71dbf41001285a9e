//! Constant values.

/// Storage key holding the serialized session.
pub static SESSION_STORAGE_KEY: &str = "session";

/// Backend used when no base url is configured.
pub static DEFAULT_API_URL: &str = "http://localhost:5000";

/// Fundraising goal, in naira.
pub static DONATION_GOAL: u64 = 5_000_000;

/// Minimum length of a new password.
pub static MIN_PASSWORD_LENGTH: usize = 6;
