//! Application views.
use serde::{Deserialize, Serialize};

/// Minimum privilege a view declares.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    Public,
    MemberOnly,
    AdminOnly,
}

/// Views of the application.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Login,
    Signup,

    /// Completes a password reset.
    /// Holds the one time reset token from the emailed link.
    ResetPassword(String),

    Profile,
    Directory,
    Events,
    News,
    Forums,
    Gallery,
    Donations,
    DonationSuccess,
    Admin,
    NotFound,
}

impl View {
    pub fn requirement(&self) -> Requirement {
        match self {
            Self::Profile | Self::Directory => Requirement::MemberOnly,
            Self::Admin => Requirement::AdminOnly,
            Self::Home
            | Self::Login
            | Self::Signup
            | Self::ResetPassword(_)
            | Self::Events
            | Self::News
            | Self::Forums
            | Self::Gallery
            | Self::Donations
            | Self::DonationSuccess
            | Self::NotFound => Requirement::Public,
        }
    }
}
