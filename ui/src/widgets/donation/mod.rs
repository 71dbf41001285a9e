//! Donation widgets.
pub mod donation_progress;

// Re-exports
pub use donation_progress::{group_thousands, DonationProgress};
