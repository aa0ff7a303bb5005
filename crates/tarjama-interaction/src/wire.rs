//! Wire formats of the translation backend.
//!
//! Requests are snake_case, translation objects in responses are camelCase.
//! Response fields are all optional here so that shape problems surface as
//! `MalformedResponse` instead of opaque decode failures.

use serde::{Deserialize, Serialize};
use tarjama_core::id_format::{deserialize_id, deserialize_optional_id};
use tarjama_core::translation::{CorrectionRequest, TranslationRecord};
use tarjama_core::{Result, TranslatorError};

#[derive(Debug, Serialize)]
pub(crate) struct TranslateRequest<'a> {
    pub source_text: &'a str,
    pub from_lang: &'a str,
    pub to_lang: &'a str,
    pub user_id: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SaveCorrectionRequest<'a> {
    pub source_text: &'a str,
    pub translated_text: &'a str,
    pub from_lang: &'a str,
    pub to_lang: &'a str,
    pub is_correction: bool,
    pub original_translation_id: &'a str,
}

impl<'a> From<&'a CorrectionRequest> for SaveCorrectionRequest<'a> {
    fn from(request: &'a CorrectionRequest) -> Self {
        Self {
            source_text: &request.source_text,
            translated_text: &request.corrected_text,
            from_lang: &request.from_lang,
            to_lang: &request.to_lang,
            // the backend only stores corrections through this route
            is_correction: true,
            original_translation_id: &request.original_translation_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CredentialsRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub access_token: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub user_id: String,
    pub email: String,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TranslationObject {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub source_text: Option<String>,
    #[serde(default)]
    pub translated_text: Option<String>,
    #[serde(default)]
    pub from_lang: Option<String>,
    #[serde(default)]
    pub to_lang: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub is_correction: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub original_translation_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub user_id: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl TranslationObject {
    /// Converts a translate/save response.
    ///
    /// Only `translatedText` is mandatory; the other text fields fall back to
    /// what the client sent.
    pub fn into_record(self, fallback: RecordFallback<'_>) -> Result<TranslationRecord> {
        let translated_text = self
            .translated_text
            .ok_or_else(|| TranslatorError::malformed("missing translatedText"))?;

        Ok(TranslationRecord {
            id: self.id,
            source_text: non_empty(self.source_text).unwrap_or_else(|| fallback.source_text.to_string()),
            translated_text,
            from_lang: non_empty(self.from_lang).unwrap_or_else(|| fallback.from_lang.to_string()),
            to_lang: non_empty(self.to_lang).unwrap_or_else(|| fallback.to_lang.to_string()),
            timestamp: self.timestamp.unwrap_or_default(),
            is_correction: self.is_correction.unwrap_or(false),
            original_translation_id: self.original_translation_id,
            user_id: self.user_id,
        })
    }

    /// Converts a history entry, or `None` when it lacks either text.
    pub fn into_history_record(self) -> Option<TranslationRecord> {
        let source_text = non_empty(self.source_text)?;
        let translated_text = non_empty(self.translated_text)?;

        Some(TranslationRecord {
            id: self.id,
            source_text,
            translated_text,
            from_lang: self.from_lang.unwrap_or_default(),
            to_lang: self.to_lang.unwrap_or_default(),
            timestamp: self.timestamp.unwrap_or_default(),
            is_correction: self.is_correction.unwrap_or(false),
            original_translation_id: self.original_translation_id,
            user_id: self.user_id,
        })
    }
}

/// Request values used when a response omits a field.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RecordFallback<'a> {
    pub source_text: &'a str,
    pub from_lang: &'a str,
    pub to_lang: &'a str,
}
