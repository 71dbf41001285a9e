//! [`Transport`] over HTTP.
use super::transport::{Body, FormField, Method, Request, Response, Transport};
use crate::config::ClientConfig;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

/// Sends requests with `reqwest`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    config: ClientConfig,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    #[tracing::instrument(skip_all, fields(method = ?request.method, path = %request.path))]
    async fn send(&self, request: Request) -> Result<Response> {
        let url = self.config.url(&request.path);
        let builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
        };

        let builder = if request.query.is_empty() {
            builder
        } else {
            builder.query(&request.query)
        };

        let builder = match &request.bearer {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let builder = match request.body {
            Body::Empty => builder,
            Body::Json(body) => builder.json(&body),
            Body::Multipart(fields) => builder.multipart(multipart_form(fields)?),
        };

        let response = builder
            .send()
            .await
            .map_err(|err| Error::Network(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| Error::Network(err.to_string()))?;

        tracing::debug!(status);
        Ok(Response { status, body })
    }
}

fn multipart_form(fields: Vec<FormField>) -> Result<Form> {
    let mut form = Form::new();
    for field in fields {
        form = match field {
            FormField::Text { name, value } => form.text(name, value),
            FormField::File { name, file } => {
                let part = Part::bytes(file.bytes)
                    .file_name(file.file_name)
                    .mime_str(&file.mime)
                    .map_err(|err| Error::Validation(err.to_string()))?;

                form.part(name, part)
            }
        };
    }

    Ok(form)
}
