//! Test utilities.
use crate::api::{Request, Response, Transport};
use crate::system::Credentials;
use crate::types::Role;
use crate::{Error, Result};
use async_trait::async_trait;
use fake::faker::lorem::raw::Word;
use fake::faker::name::raw::Name;
use fake::locales::EN;
use fake::Fake;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// [`Transport`] recording every request and replaying scripted responses.
/// Clones share their record and script.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    requests: Rc<RefCell<Vec<Request>>>,
    responses: Rc<RefCell<VecDeque<Result<Response>>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response.
    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(Response::new(status, body)));

        self
    }

    /// Queues a network failure.
    pub fn fail(&self) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Err(Error::Network("connection refused".to_string())));

        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    /// Requests carrying a bearer credential.
    pub fn protected_requests(&self) -> Vec<Request> {
        self.requests
            .borrow()
            .iter()
            .filter(|request| request.bearer.is_some())
            .cloned()
            .collect()
    }
}

#[async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn send(&self, request: Request) -> Result<Response> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Response::new(200, "null")))
    }
}

/// Random credentials with the given role.
pub fn credentials(role: Role) -> Credentials {
    let token: String = Word(EN).fake();
    let name: String = Name(EN).fake();
    Credentials::new(format!("{token}-{}", role.as_str()), role, name)
}
