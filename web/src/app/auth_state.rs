//! Authentication state.
use alumni_core::system::{Credentials, Session, SessionStorage, SessionStore};
use alumni_core::Error;
use std::rc::Rc;
use yew::prelude::*;

/// Storage the application's [`SessionStore`] writes through.
pub type SharedStorage = Rc<dyn SessionStorage>;

#[derive(Debug)]
pub enum AuthStateAction {
    /// Persist credentials issued by a login.
    SetCredentials(Credentials),

    /// Log out.
    ClearSession,

    /// A protected call failed.
    /// Clears the session if the backend rejected the credential.
    Reject(Error),

    /// Re-read the stored session,
    /// e.g. after it changed in another tab.
    Reload,
}

/// Mirror of the stored session for rendering.
/// Every action writes through the store first, then re-reads it.
#[derive(Clone)]
pub struct AuthState {
    store: SessionStore<SharedStorage>,
    session: Session,
}

impl AuthState {
    pub fn new(storage: SharedStorage) -> Self {
        let store = SessionStore::new(storage);
        let session = store.get_session();
        Self { store, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &SessionStore<SharedStorage> {
        &self.store
    }

    /// Returns whether a user is authenticated or not.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}

impl PartialEq for AuthState {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session
    }
}

impl std::fmt::Debug for AuthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthState")
            .field("authenticated", &self.session.is_authenticated())
            .field("role", &self.session.role())
            .finish()
    }
}

impl Reducible for AuthState {
    type Action = AuthStateAction;

    #[tracing::instrument(level = "debug", skip_all)]
    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthStateAction::SetCredentials(credentials) => {
                if let Err(err) = self.store.set_credentials(&credentials) {
                    tracing::error!(?err, "could not store session");
                }
            }
            AuthStateAction::ClearSession => {
                self.store.clear_session();
            }
            AuthStateAction::Reject(err) => {
                self.store.reject(&err);
            }
            AuthStateAction::Reload => {}
        };

        let session = self.store.get_session();
        if session == self.session {
            return self;
        }

        Self {
            store: self.store.clone(),
            session,
        }
        .into()
    }
}

pub type AuthStateReducer = UseReducerHandle<AuthState>;

#[cfg(test)]
#[path = "./auth_state_test.rs"]
mod auth_state_test;
