//! Durable key-value storage for the session credential.
//!
//! The browser build backs this with `localStorage`; tests use [`MemoryStore`].

use std::collections::HashMap;

use thiserror::Error;

use crate::protocol::ACCESS_TOKEN_KEY;

/// Errors a store can report when writing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No storage backend is reachable (e.g. storage disabled by the browser)
    #[error("storage is unavailable")]
    Unavailable,
    /// The backend refused the write (quota, private mode, ...)
    #[error("storage rejected write to '{key}': {reason}")]
    WriteRejected { key: String, reason: String },
}

/// Process-wide persistent string store.
///
/// Reads and removals are infallible from the caller's point of view: a
/// backend that cannot be read behaves as if the key were absent, and a
/// failed removal is the backend's to log.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&mut self, key: &str);

    /// The stored access token, if any. Empty strings count as absent.
    fn access_token(&self) -> Option<String> {
        self.get(ACCESS_TOKEN_KEY).filter(|token| !token.is_empty())
    }
}

/// In-memory store, used for tests and as a fallback when no durable
/// backend exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for a store that already holds a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(ACCESS_TOKEN_KEY.to_string(), token.into());
        Self { entries }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
