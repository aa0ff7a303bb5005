//! Theme preference persistence.

use crate::storage::{FileKeyValueStore, keys};
use tarjama_core::Result;
use tarjama_core::theme::ThemePreference;

#[derive(Clone)]
pub struct ThemeService {
    store: FileKeyValueStore,
}

impl ThemeService {
    pub fn new(store: FileKeyValueStore) -> Self {
        Self { store }
    }

    /// Stored theme, or the default when nothing valid is stored.
    pub fn current(&self) -> ThemePreference {
        match self.store.get(keys::THEME) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("Ignoring stored theme: {}", e);
                ThemePreference::default()
            }),
            Ok(None) => ThemePreference::default(),
            Err(e) => {
                tracing::warn!("Failed to read theme preference: {}", e);
                ThemePreference::default()
            }
        }
    }

    pub fn set(&self, theme: ThemePreference) -> Result<()> {
        self.store.set(keys::THEME, theme.as_str())
    }

    /// Flips light/dark and persists the result.
    pub fn toggle(&self) -> Result<ThemePreference> {
        let next = self.current().toggled();
        self.set(next)?;
        Ok(next)
    }
}
