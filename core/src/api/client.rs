//! Backend client.
use super::transport::{Request, Response, Transport};
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Client for the backend.
/// Endpoints are implemented per concern in the sibling modules.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T> ApiClient<T>
where
    T: Transport,
{
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends the request, mapping non success statuses to an [`Error`].
    pub(crate) async fn send(&self, request: Request) -> Result<Response> {
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            let err = Error::from_status(response.status, &response.body);
            tracing::debug!(status = response.status, %err);
            return Err(err);
        }

        Ok(response)
    }

    /// Sends the request and decodes the JSON response.
    pub(crate) async fn fetch<R>(&self, request: Request) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let response = self.send(request).await?;
        decode(&response)
    }

    /// Sends the request, ignoring the response body.
    pub(crate) async fn submit(&self, request: Request) -> Result {
        self.send(request).await.map(|_| ())
    }

    /// Sends the request and returns the backend's `msg`, if any.
    pub(crate) async fn message(&self, request: Request) -> Result<Option<String>> {
        let response = self.send(request).await?;
        Ok(serde_json::from_str::<MessageBody>(&response.body)
            .ok()
            .and_then(|body| body.msg))
    }
}

pub(crate) fn decode<R>(response: &Response) -> Result<R>
where
    R: DeserializeOwned,
{
    serde_json::from_str(&response.body).map_err(|err| Error::Decode(err.to_string()))
}

pub(crate) fn json_body(value: &impl Serialize) -> Result<serde_json::Value> {
    serde_json::to_value(value).map_err(|err| Error::Decode(err.to_string()))
}

#[derive(Deserialize)]
struct MessageBody {
    msg: Option<String>,
}
