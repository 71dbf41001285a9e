//! UI Widgets
pub mod donation;
pub mod event;
pub mod gallery;
pub mod member;
pub mod suspense;

// Re-exports
pub use donation::DonationProgress;
pub use member::{MemberCard, MemberDeck};
pub use suspense::Loading;
