//! Profile endpoints.
use super::client::ApiClient;
use super::transport::{FilePart, FormField, Request, Transport};
use crate::records::Member;
use crate::system::Credentials;
use crate::Result;

/// Editable profile fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub name: String,
    pub graduation_year: String,
    pub bio: String,
    pub location: String,

    /// New profile picture, if changed.
    pub profile_pic: Option<FilePart>,
}

impl ProfileUpdate {
    /// Form prefilled from the current profile.
    pub fn from_member(member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            graduation_year: member
                .graduation_year
                .map(|year| year.to_string())
                .unwrap_or_default(),
            bio: member.bio.clone().unwrap_or_default(),
            location: member.location.clone().unwrap_or_default(),
            profile_pic: None,
        }
    }

    fn into_fields(self) -> Vec<FormField> {
        let mut fields = vec![
            text("name", self.name),
            text("graduationYear", self.graduation_year),
            text("bio", self.bio),
            text("location", self.location),
        ];

        if let Some(file) = self.profile_pic {
            fields.push(FormField::File {
                name: "profilePic".to_string(),
                file,
            });
        }

        fields
    }
}

fn text(name: &str, value: String) -> FormField {
    FormField::Text {
        name: name.to_string(),
        value,
    }
}

impl<T> ApiClient<T>
where
    T: Transport,
{
    #[tracing::instrument(skip_all)]
    pub async fn profile(&self, credentials: &Credentials) -> Result<Member> {
        self.fetch(Request::get("/api/profile").bearer(credentials.token()))
            .await
    }

    #[tracing::instrument(skip_all)]
    pub async fn update_profile(&self, credentials: &Credentials, update: ProfileUpdate) -> Result {
        let request = Request::put("/api/profile")
            .bearer(credentials.token())
            .multipart(update.into_fields());

        self.submit(request).await
    }
}
