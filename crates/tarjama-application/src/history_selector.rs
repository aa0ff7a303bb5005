//! History selector.
//!
//! Fetches the signed-in user's translation history and hands a chosen entry
//! to whoever displays it.

use std::sync::Arc;
use tarjama_core::identity::Identity;
use tarjama_core::translation::history::is_displayable;
use tarjama_core::translation::{BackendGateway, TranslationRecord};
use tarjama_core::{Result, TranslatorError};

/// Receiver of a history selection.
///
/// Implemented by the session controller; the selector never reaches into it
/// any other way.
pub trait SelectionSink {
    /// Loads `record` for display and opens correction mode on it.
    fn select_from_history(&mut self, record: TranslationRecord);
}

pub struct HistorySelector {
    gateway: Arc<dyn BackendGateway>,
    entries: Vec<TranslationRecord>,
}

impl HistorySelector {
    pub fn new(gateway: Arc<dyn BackendGateway>) -> Self {
        Self {
            gateway,
            entries: Vec::new(),
        }
    }

    /// Fetches history for `identity`, newest first.
    ///
    /// Without an identity the history is empty and no request is made.
    pub async fn fetch_history(
        &mut self,
        identity: Option<&Identity>,
    ) -> Result<Vec<TranslationRecord>> {
        // a failed fetch must not leave a previous user's entries selectable
        self.entries.clear();

        let Some(identity) = identity else {
            return Ok(Vec::new());
        };

        let mut records = self.gateway.list_history(Some(identity)).await?;
        records.retain(is_displayable);

        tracing::debug!("Fetched {} history entries", records.len());
        self.entries = records.clone();
        Ok(records)
    }

    /// The list from the last successful fetch.
    pub fn entries(&self) -> &[TranslationRecord] {
        &self.entries
    }

    pub fn select(&self, record: &TranslationRecord, sink: &mut dyn SelectionSink) {
        sink.select_from_history(record.clone());
    }

    /// Selects the entry at `index` in [`entries`](Self::entries).
    pub fn select_index(&self, index: usize, sink: &mut dyn SelectionSink) -> Result<()> {
        let record = self.entries.get(index).ok_or_else(|| {
            TranslatorError::validation(format!("No history entry at position {index}."))
        })?;
        self.select(record, sink);
        Ok(())
    }

    /// Forgets the fetched list (used on logout).
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
