//! Fundraising.
mod donation_success;
mod donations;

pub use donation_success::DonationSuccess;
pub use donations::Donations;
