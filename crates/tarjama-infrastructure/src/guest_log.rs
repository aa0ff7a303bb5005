//! File-backed guest translation log.

use crate::storage::{FileKeyValueStore, keys};
use tarjama_core::Result;
use tarjama_core::translation::{GUEST_LOG_CAPACITY, GuestTranslationLog, TranslationRecord};

#[derive(Clone)]
pub struct FileGuestTranslationLog {
    store: FileKeyValueStore,
}

impl FileGuestTranslationLog {
    pub fn new(store: FileKeyValueStore) -> Self {
        Self { store }
    }
}

impl GuestTranslationLog for FileGuestTranslationLog {
    fn record(&self, record: &TranslationRecord) -> Result<()> {
        self.store.update(keys::GUEST_HISTORY, |current| {
            let mut entries = current.map(parse_entries).unwrap_or_default();
            entries.insert(0, record.clone());
            entries.truncate(GUEST_LOG_CAPACITY);
            Ok(serde_json::to_string(&entries)?)
        })
    }

    fn entries(&self) -> Vec<TranslationRecord> {
        match self.store.get(keys::GUEST_HISTORY) {
            Ok(Some(raw)) => parse_entries(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read guest translation log: {}", e);
                Vec::new()
            }
        }
    }
}

fn parse_entries(raw: &str) -> Vec<TranslationRecord> {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        tracing::warn!("Guest translation log is unreadable: {}", e);
        Vec::new()
    })
}
