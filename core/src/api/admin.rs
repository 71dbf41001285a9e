//! Admin endpoints.
use super::client::{json_body, ApiClient};
use super::transport::{Request, Transport};
use crate::records::Member;
use crate::system::AdminCredentials;
use crate::types::{RecordId, Role};
use crate::Result;
use serde::Serialize;

/// Changes to a member record.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemberPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_approved: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl MemberPatch {
    pub fn approve() -> Self {
        Self {
            is_approved: Some(true),
            role: None,
        }
    }

    pub fn role(role: Role) -> Self {
        Self {
            is_approved: None,
            role: Some(role),
        }
    }
}

impl<T> ApiClient<T>
where
    T: Transport,
{
    /// All members, pending and approved.
    #[tracing::instrument(skip_all)]
    pub async fn admin_users(&self, admin: &AdminCredentials) -> Result<Vec<Member>> {
        self.fetch(Request::get("/api/admin/users").bearer(admin.token()))
            .await
    }

    #[tracing::instrument(skip(self, admin))]
    pub async fn update_member(
        &self,
        admin: &AdminCredentials,
        member: &RecordId,
        patch: &MemberPatch,
    ) -> Result {
        let request = Request::put(format!("/api/admin/users/{member}"))
            .bearer(admin.token())
            .json(json_body(patch)?);

        self.submit(request).await
    }
}
