//! News and board minutes.
use super::client::{json_body, ApiClient};
use super::transport::{FilePart, FormField, Request, Transport};
use crate::records::{newest_first, BoardMinutes, NewsPost};
use crate::system::AdminCredentials;
use crate::{Error, Result};
use serde::Serialize;

/// Title and body of a post.
/// Shared by news posts and forum threads.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

impl NewPost {
    pub fn validate(&self) -> Result {
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            return Err(Error::Validation("Title and content are required".to_string()));
        }

        Ok(())
    }
}

impl<T> ApiClient<T>
where
    T: Transport,
{
    /// News, newest first.
    #[tracing::instrument(skip(self))]
    pub async fn news(&self) -> Result<Vec<NewsPost>> {
        let mut news: Vec<NewsPost> = self.fetch(Request::get("/api/news")).await?;
        newest_first(&mut news);
        Ok(news)
    }

    /// Board minutes, newest first.
    #[tracing::instrument(skip(self))]
    pub async fn board_minutes(&self) -> Result<Vec<BoardMinutes>> {
        let mut minutes: Vec<BoardMinutes> =
            self.fetch(Request::get("/api/board-minutes")).await?;
        newest_first(&mut minutes);
        Ok(minutes)
    }

    #[tracing::instrument(skip(self, admin))]
    pub async fn post_news(&self, admin: &AdminCredentials, post: &NewPost) -> Result {
        post.validate()?;
        let request = Request::post("/api/news")
            .bearer(admin.token())
            .json(json_body(post)?);

        self.submit(request).await
    }

    /// Uploads board minutes as a pdf.
    #[tracing::instrument(skip(self, admin, file))]
    pub async fn upload_minutes(
        &self,
        admin: &AdminCredentials,
        title: &str,
        file: FilePart,
    ) -> Result {
        if title.trim().is_empty() {
            return Err(Error::Validation("A title is required".to_string()));
        }

        let request = Request::post("/api/board-minutes")
            .bearer(admin.token())
            .multipart(vec![
                FormField::Text {
                    name: "title".to_string(),
                    value: title.to_string(),
                },
                FormField::File {
                    name: "file".to_string(),
                    file,
                },
            ]);

        self.submit(request).await
    }
}
