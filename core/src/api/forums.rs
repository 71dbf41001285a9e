//! Forum threads and replies.
use super::client::{json_body, ApiClient};
use super::news::NewPost;
use super::transport::{Request, Transport};
use crate::records::{newest_first, ForumThread};
use crate::system::Credentials;
use crate::types::RecordId;
use crate::{Error, Result};

impl<T> ApiClient<T>
where
    T: Transport,
{
    /// Threads, newest first.
    #[tracing::instrument(skip(self))]
    pub async fn threads(&self) -> Result<Vec<ForumThread>> {
        let mut threads: Vec<ForumThread> = self.fetch(Request::get("/api/forums")).await?;
        newest_first(&mut threads);
        Ok(threads)
    }

    #[tracing::instrument(skip(self, credentials))]
    pub async fn create_thread(&self, credentials: &Credentials, thread: &NewPost) -> Result {
        thread.validate()?;
        let request = Request::post("/api/forums")
            .bearer(credentials.token())
            .json(json_body(thread)?);

        self.submit(request).await
    }

    #[tracing::instrument(skip(self, credentials, content))]
    pub async fn reply(
        &self,
        credentials: &Credentials,
        thread: &RecordId,
        content: &str,
    ) -> Result {
        if content.trim().is_empty() {
            return Err(Error::Validation("A reply can not be empty".to_string()));
        }

        let request = Request::post(format!("/api/forums/{thread}/reply"))
            .bearer(credentials.token())
            .json(serde_json::json!({ "content": content }));

        self.submit(request).await
    }
}
