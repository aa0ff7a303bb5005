//! Durable string key-value storage backed by a single JSON object file.

use super::atomic_json::{AtomicJsonError, AtomicJsonFile};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use tarjama_core::Result;

/// Well-known storage keys.
pub mod keys {
    pub const THEME: &str = "theme";
    pub const AUTH_TOKEN: &str = "authToken";
    pub const IDENTITY: &str = "translatorUser";
    pub const GUEST_HISTORY: &str = "translation_history_guest";
}

type Entries = BTreeMap<String, String>;

/// Key-value store persisted as `{ "key": "value", ... }`.
///
/// Values are opaque strings; callers serialize structured data themselves.
/// A file that is not a JSON object of strings is treated as empty and gets
/// overwritten by the next write.
#[derive(Clone)]
pub struct FileKeyValueStore {
    file: Arc<AtomicJsonFile<Entries>>,
}

impl FileKeyValueStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: Arc::new(AtomicJsonFile::new(path)),
        }
    }

    fn read_all(&self) -> Result<Entries> {
        recover(self.file.load()).map_err(Into::into)
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    pub fn set(&self, key: &str, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        self.file.update(recover, |entries| {
            entries.insert(key.to_string(), value);
            Ok(())
        })
    }

    /// Rewrites the value at `key` under the file lock.
    ///
    /// `f` receives the current value and returns the replacement; when it
    /// fails nothing is written.
    pub fn update<F>(&self, key: &str, f: F) -> Result<()>
    where
        F: FnOnce(Option<&str>) -> Result<String>,
    {
        self.file.update(recover, |entries| {
            let next = f(entries.get(key).map(String::as_str))?;
            entries.insert(key.to_string(), next);
            Ok(())
        })
    }

    /// Removes every listed key in one write.
    pub fn remove(&self, keys: &[&str]) -> Result<()> {
        self.file.update(recover, |entries| {
            for key in keys {
                entries.remove(*key);
            }
            Ok(())
        })
    }
}

fn recover(
    loaded: std::result::Result<Option<Entries>, AtomicJsonError>,
) -> std::result::Result<Entries, AtomicJsonError> {
    match loaded {
        Ok(entries) => Ok(entries.unwrap_or_default()),
        Err(AtomicJsonError::JsonError(e)) => {
            tracing::warn!("Discarding unreadable storage file: {}", e);
            Ok(Entries::new())
        }
        Err(e) => Err(e),
    }
}
