//! Event calendar.
use super::client::{json_body, ApiClient};
use super::transport::{Request, Transport};
use crate::records::Event;
use crate::system::Credentials;
use crate::{Error, Result};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct NewEvent {
    pub title: String,
    pub description: String,

    /// `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub date: String,
    pub location: String,
}

impl NewEvent {
    pub fn validate(&self) -> Result {
        if self.title.trim().is_empty() || self.date.trim().is_empty() {
            return Err(Error::Validation("Title and date are required".to_string()));
        }

        Ok(())
    }
}

impl<T> ApiClient<T>
where
    T: Transport,
{
    #[tracing::instrument(skip(self))]
    pub async fn events(&self) -> Result<Vec<Event>> {
        self.fetch(Request::get("/api/events")).await
    }

    #[tracing::instrument(skip(self, credentials))]
    pub async fn create_event(&self, credentials: &Credentials, event: &NewEvent) -> Result {
        event.validate()?;
        let request = Request::post("/api/events")
            .bearer(credentials.token())
            .json(json_body(event)?);

        self.submit(request).await
    }
}
