//! Composition root: wires storage, the HTTP gateway and the use cases.

use anyhow::{Context, Result};
use std::sync::Arc;
use tarjama_application::{AccountService, HistorySelector, TranslationSessionController};
use tarjama_core::config::ClientConfig;
use tarjama_infrastructure::{
    FileGuestTranslationLog, FileKeyValueStore, FileSessionStore, TarjamaPaths, ThemeService,
};
use tarjama_interaction::HttpGateway;

pub struct App {
    pub gateway: Arc<HttpGateway>,
    pub account: AccountService,
    pub theme: ThemeService,
    pub guest_log: Arc<FileGuestTranslationLog>,
}

impl App {
    pub fn bootstrap(paths: &TarjamaPaths, config: &ClientConfig) -> Result<Self> {
        let storage_file = paths.storage_file().context("Failed to resolve storage path")?;
        let store = FileKeyValueStore::new(storage_file);

        let gateway = Arc::new(HttpGateway::from_config(&config.backend));
        let session_store = Arc::new(FileSessionStore::new(store.clone()));
        let account = AccountService::new(session_store, gateway.clone())
            .context("Failed to restore session")?;

        tracing::debug!(base_url = %gateway.base_url(), "Application bootstrapped");

        Ok(Self {
            gateway,
            account,
            theme: ThemeService::new(store.clone()),
            guest_log: Arc::new(FileGuestTranslationLog::new(store)),
        })
    }

    pub fn controller(&self) -> TranslationSessionController {
        TranslationSessionController::new().with_guest_log(self.guest_log.clone())
    }

    pub fn history_selector(&self) -> HistorySelector {
        HistorySelector::new(self.gateway.clone())
    }
}
