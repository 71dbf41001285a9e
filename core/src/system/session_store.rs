//! Persistent session storage.
use super::session::{AdminCredentials, Credentials, Session};
use crate::types::Role;
use crate::{Error, Result};
use std::cell::RefCell;
use std::rc::Rc;

// ***************
// *** Storage ***
// ***************

/// Durable storage holding one serialized [`Credentials`] value.
///
/// Implementations must write the value as a single unit.
pub trait SessionStorage {
    /// # Returns
    /// The stored credentials, or `None` if nothing usable is stored.
    fn read(&self) -> Option<Credentials>;

    fn write(&self, credentials: &Credentials) -> Result;

    fn erase(&self);
}

impl<S> SessionStorage for Rc<S>
where
    S: SessionStorage + ?Sized,
{
    fn read(&self) -> Option<Credentials> {
        (**self).read()
    }

    fn write(&self, credentials: &Credentials) -> Result {
        (**self).write(credentials)
    }

    fn erase(&self) {
        (**self).erase()
    }
}

/// In memory [`SessionStorage`].
/// Clones share the same slot.
#[derive(Clone, Default, Debug)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage holding the given raw value.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(raw.into()))),
        }
    }

    /// The raw stored value.
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SessionStorage for MemoryStorage {
    fn read(&self) -> Option<Credentials> {
        let raw = self.slot.borrow().clone()?;
        serde_json::from_str(&raw).ok()
    }

    fn write(&self, credentials: &Credentials) -> Result {
        let raw =
            serde_json::to_string(credentials).map_err(|err| Error::Storage(err.to_string()))?;

        *self.slot.borrow_mut() = Some(raw);
        Ok(())
    }

    fn erase(&self) {
        *self.slot.borrow_mut() = None;
    }
}

// *********************
// *** Session Store ***
// *********************

/// Single source of truth for who is authenticated.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S> SessionStore<S>
where
    S: SessionStorage,
{
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persists the credentials as a unit.
    #[tracing::instrument(level = "debug", skip_all, fields(role = %role))]
    pub fn set_session(
        &self,
        token: impl Into<String>,
        role: Role,
        display_name: impl Into<String>,
    ) -> Result {
        self.set_credentials(&Credentials::new(token, role, display_name))
    }

    pub fn set_credentials(&self, credentials: &Credentials) -> Result {
        self.storage.write(credentials)
    }

    /// Current session. Never fails, absence is the anonymous session.
    pub fn get_session(&self) -> Session {
        Session::from(self.storage.read())
    }

    /// Re-reads the stored session and verifies it is an admin.
    ///
    /// # Errors
    /// + [`Error::NoSession`] if no one is logged in.
    /// + [`Error::AdminRequired`] if the session is not an admin.
    pub fn admin_credentials(&self) -> Result<AdminCredentials> {
        let credentials = self.storage.read().ok_or(Error::NoSession)?;
        credentials.as_admin().ok_or(Error::AdminRequired)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn clear_session(&self) {
        self.storage.erase();
    }

    /// Applies the credential rejection policy:
    /// a 401 from a protected call clears the session.
    ///
    /// # Returns
    /// `true` if the session was cleared.
    pub fn reject(&self, err: &Error) -> bool {
        if err.is_unauthenticated() {
            tracing::debug!("backend rejected session credential");
            self.clear_session();
            return true;
        }

        false
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
#[path = "./session_store_test.rs"]
mod session_store_test;
