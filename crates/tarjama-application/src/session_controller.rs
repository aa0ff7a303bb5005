//! Translation session controller.
//!
//! Owns what the translation screen shows (texts, language pair) and the
//! binding between the displayed translation and its backend record. The
//! binding is what makes a correction possible: a correction always names the
//! record it replaces, so every transition that changes what is displayed
//! drops the binding unless it installs a new one.
//!
//! # Transitions
//!
//! - `begin_translate` / `finish_translate`: a translate round-trip, guarded
//!   by a generation counter so late completions are ignored
//! - `swap_languages`: exchanges both languages and both texts
//! - history selection (through [`SelectionSink`]): binds a past record and
//!   opens correction mode
//! - `open_correction` / `submit_correction` / `cancel_correction`
//! - `reset`: back to a fresh session (logout)

use crate::history_selector::SelectionSink;
use std::sync::Arc;
use tarjama_core::identity::Identity;
use tarjama_core::translation::{
    BackendGateway, CorrectionRequest, DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG,
    GuestTranslationLog, TranslationRecord,
};
use tarjama_core::{Result, TranslatorError};

/// Shown instead of the raw decode error when the backend answers with an
/// unexpected shape.
pub const UNEXPECTED_RESPONSE_MESSAGE: &str = "Unexpected response format from the server.";

/// What the translation screen displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub source_text: String,
    pub translated_text: String,
    pub source_lang: String,
    pub to_lang: String,
    /// Backend record behind `translated_text`, if any
    pub bound_record: Option<TranslationRecord>,
    pub correction_mode_active: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            source_text: String::new(),
            translated_text: String::new(),
            source_lang: DEFAULT_SOURCE_LANG.to_string(),
            to_lang: DEFAULT_TARGET_LANG.to_string(),
            bound_record: None,
            correction_mode_active: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslateStatus {
    #[default]
    Idle,
    Translating,
}

/// Handle for one translate round-trip.
///
/// Carries the request values captured at `begin_translate`, so the caller can
/// run the gateway call elsewhere and report back with `finish_translate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateTicket {
    generation: u64,
    pub source_text: String,
    pub from_lang: String,
    pub to_lang: String,
}

pub struct TranslationSessionController {
    state: SessionState,
    status: TranslateStatus,
    generation: u64,
    correction_draft: String,
    correction_error: Option<String>,
    guest_log: Option<Arc<dyn GuestTranslationLog>>,
}

impl Default for TranslationSessionController {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationSessionController {
    pub fn new() -> Self {
        Self {
            state: SessionState::default(),
            status: TranslateStatus::Idle,
            generation: 0,
            correction_draft: String::new(),
            correction_error: None,
            guest_log: None,
        }
    }

    /// Records successful unauthenticated translations in `log`.
    pub fn with_guest_log(mut self, log: Arc<dyn GuestTranslationLog>) -> Self {
        self.guest_log = Some(log);
        self
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn status(&self) -> TranslateStatus {
        self.status
    }

    pub fn is_translating(&self) -> bool {
        self.status == TranslateStatus::Translating
    }

    pub fn bound_record(&self) -> Option<&TranslationRecord> {
        self.state.bound_record.as_ref()
    }

    pub fn correction_draft(&self) -> &str {
        &self.correction_draft
    }

    /// Inline error of the last failed correction submission.
    pub fn correction_error(&self) -> Option<&str> {
        self.correction_error.as_deref()
    }

    // ============================================================================
    // Input
    // ============================================================================

    pub fn set_source_text(&mut self, text: impl Into<String>) {
        self.state.source_text = text.into();
    }

    pub fn set_source_lang(&mut self, lang: impl Into<String>) {
        self.state.source_lang = lang.into();
    }

    pub fn set_to_lang(&mut self, lang: impl Into<String>) {
        self.state.to_lang = lang.into();
    }

    // ============================================================================
    // Translation
    // ============================================================================

    /// True when a translate request may be sent.
    pub fn can_submit(&self) -> bool {
        self.validate_submission().is_ok() && !self.is_translating()
    }

    fn validate_submission(&self) -> Result<()> {
        if self.state.source_text.trim().is_empty() {
            return Err(TranslatorError::validation("Please enter text to translate."));
        }
        if self.state.source_lang.trim().is_empty() || self.state.to_lang.trim().is_empty() {
            return Err(TranslatorError::validation(
                "Please choose a source and a target language.",
            ));
        }
        Ok(())
    }

    /// Starts a translate round-trip.
    ///
    /// Clears the displayed translation, its binding and any correction in
    /// progress, then hands out a ticket for the new generation.
    pub fn begin_translate(&mut self) -> Result<TranslateTicket> {
        self.validate_submission()?;
        if self.is_translating() {
            return Err(TranslatorError::validation(
                "A translation is already in progress.",
            ));
        }

        self.state.translated_text.clear();
        self.clear_binding();
        self.generation += 1;
        self.status = TranslateStatus::Translating;

        tracing::debug!(generation = self.generation, "Translate started");

        Ok(TranslateTicket {
            generation: self.generation,
            source_text: self.state.source_text.clone(),
            from_lang: self.state.source_lang.clone(),
            to_lang: self.state.to_lang.clone(),
        })
    }

    /// Applies the outcome of a translate round-trip.
    ///
    /// Returns `false` (and leaves the state untouched) when `ticket` belongs
    /// to an outdated generation.
    pub fn finish_translate(
        &mut self,
        ticket: &TranslateTicket,
        outcome: Result<TranslationRecord>,
    ) -> bool {
        if ticket.generation != self.generation || !self.is_translating() {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "Discarding stale translate completion"
            );
            return false;
        }

        match outcome {
            Ok(record) => {
                self.state.translated_text = record.translated_text.clone();
                self.state.bound_record = Some(record);
            }
            Err(e) => {
                self.state.translated_text = if e.is_malformed() {
                    UNEXPECTED_RESPONSE_MESSAGE.to_string()
                } else {
                    e.to_string()
                };
                self.state.bound_record = None;
            }
        }

        self.status = TranslateStatus::Idle;
        true
    }

    /// Runs a full translate round-trip through `gateway`.
    ///
    /// Backend and transport failures are rendered into `translated_text`;
    /// only input validation is reported as an `Err`.
    pub async fn translate(
        &mut self,
        gateway: &dyn BackendGateway,
        identity: Option<&Identity>,
    ) -> Result<()> {
        let ticket = self.begin_translate()?;

        let outcome = gateway
            .translate(
                &ticket.source_text,
                &ticket.from_lang,
                &ticket.to_lang,
                identity,
            )
            .await;

        let guest_record = match (&outcome, identity) {
            (Ok(record), None) => Some(record.clone()),
            _ => None,
        };

        if self.finish_translate(&ticket, outcome)
            && let Some(record) = guest_record
            && let Some(log) = &self.guest_log
            && let Err(e) = log.record(&record)
        {
            tracing::warn!("Failed to record guest translation: {}", e);
        }

        Ok(())
    }

    /// Exchanges source/target languages and texts.
    ///
    /// A pending translate is abandoned: its result belongs to the old pair.
    pub fn swap_languages(&mut self) {
        self.abandon_pending_translate();

        let state = &mut self.state;
        std::mem::swap(&mut state.source_lang, &mut state.to_lang);
        std::mem::swap(&mut state.source_text, &mut state.translated_text);
        self.clear_binding();
    }

    // ============================================================================
    // Correction
    // ============================================================================

    /// True when the displayed translation is backed by a persisted record.
    pub fn can_correct(&self) -> bool {
        self.state
            .bound_record
            .as_ref()
            .is_some_and(TranslationRecord::is_persisted)
    }

    /// Enters correction mode for the currently bound record.
    pub fn open_correction(&mut self) -> Result<()> {
        if !self.can_correct() {
            return Err(TranslatorError::validation(
                "This translation cannot be corrected.",
            ));
        }
        self.correction_draft = self.state.translated_text.clone();
        self.correction_error = None;
        self.state.correction_mode_active = true;
        Ok(())
    }

    pub fn edit_correction(&mut self, text: impl Into<String>) {
        self.correction_draft = text.into();
    }

    /// Sends the draft as a correction of the bound record.
    ///
    /// On success the draft becomes the displayed translation and the binding
    /// is dropped: correcting again requires selecting the entry from history.
    /// On failure the error is kept inline and correction mode stays open.
    pub async fn submit_correction(
        &mut self,
        gateway: &dyn BackendGateway,
        identity: Option<&Identity>,
    ) -> Result<TranslationRecord> {
        let result = self.submit_correction_inner(gateway, identity).await;

        match &result {
            Ok(saved) => {
                self.state.translated_text = std::mem::take(&mut self.correction_draft);
                self.state.correction_mode_active = false;
                self.state.bound_record = None;
                self.correction_error = None;
                tracing::info!(
                    original_translation_id = saved.original_translation_id.as_deref().unwrap_or(""),
                    "Correction saved"
                );
            }
            Err(e) => {
                self.correction_error = Some(e.to_string());
            }
        }

        result
    }

    async fn submit_correction_inner(
        &self,
        gateway: &dyn BackendGateway,
        identity: Option<&Identity>,
    ) -> Result<TranslationRecord> {
        if !self.state.correction_mode_active {
            return Err(TranslatorError::validation("No correction in progress."));
        }
        if self.correction_draft.trim().is_empty() {
            return Err(TranslatorError::validation("Please enter a correction."));
        }

        let bound = self
            .state
            .bound_record
            .as_ref()
            .ok_or_else(|| TranslatorError::validation("No translation selected for correction."))?;
        let original_translation_id = bound
            .id
            .clone()
            .ok_or_else(|| TranslatorError::validation("This translation cannot be corrected."))?;

        if identity.is_none() {
            return Err(TranslatorError::Authentication);
        }

        let request = CorrectionRequest {
            source_text: bound.source_text.clone(),
            corrected_text: self.correction_draft.clone(),
            from_lang: bound.from_lang.clone(),
            to_lang: bound.to_lang.clone(),
            original_translation_id,
        };

        gateway.save_correction(&request, identity).await
    }

    /// Leaves correction mode without saving.
    pub fn cancel_correction(&mut self) {
        self.clear_binding();
    }

    /// Returns to a fresh session; any in-flight translate is ignored.
    pub fn reset(&mut self) {
        self.state = SessionState::default();
        self.correction_draft.clear();
        self.correction_error = None;
        self.abandon_pending_translate();
    }

    fn abandon_pending_translate(&mut self) {
        self.generation += 1;
        self.status = TranslateStatus::Idle;
    }

    fn clear_binding(&mut self) {
        self.state.bound_record = None;
        self.state.correction_mode_active = false;
        self.correction_draft.clear();
        self.correction_error = None;
    }
}

impl SelectionSink for TranslationSessionController {
    fn select_from_history(&mut self, record: TranslationRecord) {
        // a pending translate must not overwrite the selected entry
        self.abandon_pending_translate();

        self.state.source_text = record.source_text.clone();
        self.state.translated_text = record.translated_text.clone();
        self.state.source_lang = record.from_lang.clone();
        self.state.to_lang = record.to_lang.clone();
        self.correction_draft = record.translated_text.clone();
        self.correction_error = None;
        self.state.bound_record = Some(record);
        self.state.correction_mode_active = true;
    }
}
