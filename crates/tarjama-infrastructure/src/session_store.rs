//! File-backed session store.
//!
//! Persists the identity blob and the bearer token in the durable key-value
//! file, the same way the web client kept them in local storage.

use crate::storage::{FileKeyValueStore, keys};
use tarjama_core::Result;
use tarjama_core::identity::{Identity, SessionStore};

#[derive(Clone)]
pub struct FileSessionStore {
    store: FileKeyValueStore,
}

impl FileSessionStore {
    pub fn new(store: FileKeyValueStore) -> Self {
        Self { store }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Identity>> {
        let Some(blob) = self.store.get(keys::IDENTITY)? else {
            return Ok(None);
        };

        match serde_json::from_str::<Identity>(&blob) {
            Ok(identity) => {
                tracing::debug!("Restored session for {}", identity.email);
                Ok(Some(identity))
            }
            Err(e) => {
                tracing::warn!("Stored identity is unreadable, clearing it: {}", e);
                self.store.remove(&[keys::IDENTITY])?;
                Ok(None)
            }
        }
    }

    fn save(&self, identity: &Identity) -> Result<()> {
        let blob = serde_json::to_string(identity)?;
        self.store.set(keys::IDENTITY, blob)?;
        self.store.set(keys::AUTH_TOKEN, identity.token.clone())?;
        tracing::info!("Saved session for {}", identity.email);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.store.remove(&[keys::IDENTITY, keys::AUTH_TOKEN])?;
        tracing::info!("Cleared stored session");
        Ok(())
    }
}
