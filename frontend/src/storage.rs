//! `localStorage`-backed credential store.
//!
//! Values are written raw (not JSON encoded) so a token set by any other
//! client on the same origin reads back unchanged.

use shared::{CredentialStore, StoreError};
use web_sys::Storage;

#[derive(Debug, Clone)]
pub struct BrowserStore {
    storage: Option<Storage>,
}

impl BrowserStore {
    /// Attach to `window.localStorage`. When the browser denies access the
    /// store reads as empty and refuses writes.
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage is unavailable, sessions will not persist");
        }
        Self { storage }
    }
}

impl CredentialStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::WriteRejected {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn remove(&mut self, key: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            log::warn!("Failed to remove '{}' from localStorage: {:?}", key, e);
        }
    }
}
