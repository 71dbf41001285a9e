//! Member directory.
use super::client::ApiClient;
use super::transport::{Request, Transport};
use crate::records::Member;
use crate::system::Credentials;
use crate::Result;

/// Directory filters. Empty values match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DirectoryFilter {
    pub year: String,
    pub location: String,
}

impl<T> ApiClient<T>
where
    T: Transport,
{
    #[tracing::instrument(skip(self, credentials))]
    pub async fn directory(
        &self,
        credentials: &Credentials,
        filter: &DirectoryFilter,
    ) -> Result<Vec<Member>> {
        let request = Request::get("/api/directory")
            .bearer(credentials.token())
            .query("year", filter.year.trim())
            .query("location", filter.location.trim());

        self.fetch(request).await
    }
}
