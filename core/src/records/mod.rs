//! Records owned by the backend.
//! Held only transiently by the views that fetch them.
pub mod date;
pub mod donation;
pub mod event;
pub mod forum;
pub mod gallery;
pub mod member;
pub mod news;

// Re-exports
pub use donation::{Donation, DonationSummary, DonationVerification};
pub use event::Event;
pub use forum::{ForumReply, ForumThread};
pub use gallery::GalleryImage;
pub use member::{Author, Member};
pub use news::{BoardMinutes, NewsPost};

use chrono::{DateTime, Utc};

/// Records carrying a timestamp.
pub trait Dated {
    fn date(&self) -> Option<DateTime<Utc>>;
}

/// Sorts records newest first.
/// Records without a date go last.
pub fn newest_first<T: Dated>(records: &mut [T]) {
    records.sort_by(|a, b| b.date().cmp(&a.date()));
}

#[cfg(test)]
#[path = "./mod_test.rs"]
mod mod_test;
