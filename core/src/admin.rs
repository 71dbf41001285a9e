//! Admin actions.
//!
//! Admin actions re-read the session immediately before dispatch,
//! so a logout between render and click is never acted upon,
//! and only report an update once the backend has confirmed it.
use crate::api::admin::MemberPatch;
use crate::api::{ApiClient, Transport};
use crate::records::Member;
use crate::system::{SessionStorage, SessionStore};
use crate::types::{RecordId, Role};
use crate::Result;

/// State changing admin actions on a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminAction {
    /// Approve a pending member.
    Approve(RecordId),

    /// Switch a member between alumni and admin.
    ToggleRole { member: RecordId, current: Role },
}

impl AdminAction {
    pub fn member(&self) -> &RecordId {
        match self {
            Self::Approve(member) => member,
            Self::ToggleRole { member, .. } => member,
        }
    }

    fn patch(&self) -> MemberPatch {
        match self {
            Self::Approve(_) => MemberPatch::approve(),
            Self::ToggleRole { current, .. } => MemberPatch::role(current.toggled()),
        }
    }
}

/// Confirmed change to a single member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberUpdate {
    Approved(RecordId),
    RoleChanged { member: RecordId, role: Role },
}

impl MemberUpdate {
    pub fn member(&self) -> &RecordId {
        match self {
            Self::Approved(member) => member,
            Self::RoleChanged { member, .. } => member,
        }
    }

    /// Applies the update to the matching member only.
    ///
    /// # Returns
    /// `true` if a matching member was found.
    pub fn apply(&self, members: &mut [Member]) -> bool {
        let Some(member) = members.iter_mut().find(|member| &member.id == self.member()) else {
            return false;
        };

        match self {
            Self::Approved(_) => member.is_approved = true,
            Self::RoleChanged { role, .. } => member.role = *role,
        }

        true
    }
}

/// Dispatches an admin action.
///
/// # Errors
/// + [`Error::NoSession`](crate::Error::NoSession) if no one is logged in.
/// + [`Error::AdminRequired`](crate::Error::AdminRequired) if the session is not an admin.
///   No request is made in either case.
/// + Any error from the backend, in which case no update is returned.
#[tracing::instrument(skip(store, client))]
pub async fn dispatch<S, T>(
    store: &SessionStore<S>,
    client: &ApiClient<T>,
    action: AdminAction,
) -> Result<MemberUpdate>
where
    S: SessionStorage,
    T: Transport,
{
    let admin = store.admin_credentials()?;

    let patch = action.patch();
    client.update_member(&admin, action.member(), &patch).await?;

    let update = match action {
        AdminAction::Approve(member) => MemberUpdate::Approved(member),
        AdminAction::ToggleRole { member, current } => MemberUpdate::RoleChanged {
            member,
            role: current.toggled(),
        },
    };

    tracing::debug!(?update);
    Ok(update)
}

#[cfg(test)]
#[path = "./admin_test.rs"]
mod admin_test;
