//! Shared test doubles for the application tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tarjama_core::identity::{AuthMode, AuthOutcome, Credentials, Identity};
use tarjama_core::translation::{BackendGateway, CorrectionRequest, TranslationRecord};
use tarjama_core::{Result, TranslatorError};

pub fn record(id: Option<&str>, source: &str, translated: &str) -> TranslationRecord {
    TranslationRecord {
        id: id.map(str::to_string),
        source_text: source.to_string(),
        translated_text: translated.to_string(),
        from_lang: "ar-TD".to_string(),
        to_lang: "fr".to_string(),
        timestamp: "2024-05-01T10:00:00".to_string(),
        is_correction: false,
        original_translation_id: None,
        user_id: None,
    }
}

pub fn identity() -> Identity {
    Identity::new("7", "user@example.td", "tok-123")
}

/// Mock BackendGateway with canned answers and per-operation call counters.
pub struct MockGateway {
    translate_result: Mutex<Result<TranslationRecord>>,
    history: Vec<TranslationRecord>,
    correction_error: Option<TranslatorError>,
    history_error: Mutex<Option<TranslatorError>>,
    login_identity: Identity,
    pub translate_calls: AtomicUsize,
    pub correction_calls: AtomicUsize,
    pub history_calls: AtomicUsize,
    pub auth_calls: AtomicUsize,
    pub last_correction: Mutex<Option<CorrectionRequest>>,
    pub last_auth_mode: Mutex<Option<AuthMode>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            translate_result: Mutex::new(Ok(record(None, "", ""))),
            history: Vec::new(),
            correction_error: None,
            history_error: Mutex::new(None),
            login_identity: identity(),
            translate_calls: AtomicUsize::new(0),
            correction_calls: AtomicUsize::new(0),
            history_calls: AtomicUsize::new(0),
            auth_calls: AtomicUsize::new(0),
            last_correction: Mutex::new(None),
            last_auth_mode: Mutex::new(None),
        }
    }

    pub fn translating_to(self, result: Result<TranslationRecord>) -> Self {
        *self.translate_result.lock().unwrap() = result;
        self
    }

    pub fn with_history(mut self, history: Vec<TranslationRecord>) -> Self {
        self.history = history;
        self
    }

    pub fn failing_corrections(mut self, err: TranslatorError) -> Self {
        self.correction_error = Some(err);
        self
    }

    /// Makes every later `list_history` call fail with `err`.
    pub fn fail_history_with(&self, err: TranslatorError) {
        *self.history_error.lock().unwrap() = Some(err);
    }

    pub fn total_calls(&self) -> usize {
        self.translate_calls.load(Ordering::SeqCst)
            + self.correction_calls.load(Ordering::SeqCst)
            + self.history_calls.load(Ordering::SeqCst)
            + self.auth_calls.load(Ordering::SeqCst)
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BackendGateway for MockGateway {
    async fn translate(
        &self,
        text: &str,
        from_lang: &str,
        to_lang: &str,
        _identity: Option<&Identity>,
    ) -> Result<TranslationRecord> {
        self.translate_calls.fetch_add(1, Ordering::SeqCst);
        self.translate_result.lock().unwrap().clone().map(|mut r| {
            r.source_text = text.to_string();
            r.from_lang = from_lang.to_string();
            r.to_lang = to_lang.to_string();
            r
        })
    }

    async fn save_correction(
        &self,
        request: &CorrectionRequest,
        identity: Option<&Identity>,
    ) -> Result<TranslationRecord> {
        if identity.is_none() {
            return Err(TranslatorError::Authentication);
        }
        self.correction_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_correction.lock().unwrap() = Some(request.clone());

        if let Some(err) = &self.correction_error {
            return Err(err.clone());
        }

        let mut saved = record(Some("43"), &request.source_text, &request.corrected_text);
        saved.is_correction = true;
        saved.original_translation_id = Some(request.original_translation_id.clone());
        Ok(saved)
    }

    async fn list_history(&self, identity: Option<&Identity>) -> Result<Vec<TranslationRecord>> {
        if identity.is_none() {
            return Err(TranslatorError::Authentication);
        }
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.history_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.history.clone())
    }

    async fn authenticate(&self, _credentials: &Credentials, mode: AuthMode) -> Result<AuthOutcome> {
        self.auth_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_auth_mode.lock().unwrap() = Some(mode);
        match mode {
            AuthMode::Login => Ok(AuthOutcome::LoggedIn(self.login_identity.clone())),
            AuthMode::Signup => Ok(AuthOutcome::Registered),
        }
    }
}
