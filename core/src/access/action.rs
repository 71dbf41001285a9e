//! Gated actions.
use super::view::Requirement;
use crate::system::Session;

/// State changing actions offered by the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    UpdateProfile,
    CreateEvent,
    CreateThread,
    ReplyToThread,
    UploadImage,
    Donate,
    VerifyDonation,
    PostNews,
    UploadMinutes,
    ApproveMember,
    ChangeRole,
}

impl Action {
    pub fn requirement(&self) -> Requirement {
        match self {
            Self::UpdateProfile
            | Self::CreateEvent
            | Self::CreateThread
            | Self::ReplyToThread
            | Self::UploadImage
            | Self::Donate
            | Self::VerifyDonation => Requirement::MemberOnly,

            Self::PostNews | Self::UploadMinutes | Self::ApproveMember | Self::ChangeRole => {
                Requirement::AdminOnly
            }
        }
    }
}

/// Whether the session may invoke the action.
/// Used to decide if the affordance is shown at all.
pub fn permits(session: &Session, action: Action) -> bool {
    match action.requirement() {
        Requirement::Public => true,
        Requirement::MemberOnly => session.is_authenticated(),
        Requirement::AdminOnly => session.is_admin(),
    }
}

#[cfg(test)]
#[path = "./action_test.rs"]
mod action_test;
