//! Browser backed session storage.
use alumni_core::constants::SESSION_STORAGE_KEY;
use alumni_core::system::{Credentials, SessionStorage};
use alumni_core::{Error, Result};
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};

/// Stores the session in `localStorage` as a single JSON value.
///
/// Values that can not be read as a complete session are erased.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSessionStorage;

impl SessionStorage for LocalSessionStorage {
    fn read(&self) -> Option<Credentials> {
        match LocalStorage::get::<Credentials>(SESSION_STORAGE_KEY) {
            Ok(credentials) => Some(credentials),
            Err(StorageError::KeyNotFound(_)) => None,
            Err(err) => {
                tracing::warn!(?err, "discarding unreadable session");
                LocalStorage::delete(SESSION_STORAGE_KEY);
                None
            }
        }
    }

    fn write(&self, credentials: &Credentials) -> Result {
        LocalStorage::set(SESSION_STORAGE_KEY, credentials)
            .map_err(|err| Error::Storage(err.to_string()))
    }

    fn erase(&self) {
        LocalStorage::delete(SESSION_STORAGE_KEY);
    }
}
