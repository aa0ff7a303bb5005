//! Backend gateway trait.
//!
//! The gateway is the only component allowed to perform network I/O. Every
//! implementation maps the client's field names to the backend's wire
//! convention on the way out and back on the way in.

use super::model::{CorrectionRequest, TranslationRecord};
use crate::error::Result;
use crate::identity::{AuthMode, AuthOutcome, Credentials, Identity};

#[async_trait::async_trait]
pub trait BackendGateway: Send + Sync {
    /// Translates `text`.
    ///
    /// The bearer credential is attached only when `identity` is given; the
    /// backend persists the translation (and returns an id) only in that case.
    /// Failures come back as errors whose `Display` is the message to render
    /// inline.
    async fn translate(
        &self,
        text: &str,
        from_lang: &str,
        to_lang: &str,
        identity: Option<&Identity>,
    ) -> Result<TranslationRecord>;

    /// Saves a correction linked to its original translation.
    ///
    /// Fails with `TranslatorError::Authentication`, without touching the
    /// network, when `identity` is `None`.
    async fn save_correction(
        &self,
        request: &CorrectionRequest,
        identity: Option<&Identity>,
    ) -> Result<TranslationRecord>;

    /// Lists the user's translations and corrections, most recent first.
    ///
    /// Entries lacking source or translated text are dropped. Fails with
    /// `TranslatorError::Authentication` when `identity` is `None`.
    async fn list_history(&self, identity: Option<&Identity>) -> Result<Vec<TranslationRecord>>;

    /// Logs in or signs up.
    async fn authenticate(&self, credentials: &Credentials, mode: AuthMode) -> Result<AuthOutcome>;
}
