//! Backend client hook.
use alumni_core::api::{ApiClient, HttpTransport};
use alumni_core::config::ClientConfig;
use std::ops::Deref;
use std::rc::Rc;
use yew::prelude::*;

/// Shared [`ApiClient`] provided as a context.
#[derive(Clone)]
pub struct Api(Rc<ApiClient<HttpTransport>>);

impl Api {
    pub fn new(config: ClientConfig) -> Self {
        Self(Rc::new(ApiClient::new(HttpTransport::new(config))))
    }
}

impl PartialEq for Api {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for Api {
    type Target = ApiClient<HttpTransport>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[hook]
pub fn use_api() -> Api {
    use_context::<Api>().expect("`Api` context not found")
}
