//! Translation domain model.

use crate::id_format::deserialize_optional_id;
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A translation (or correction) as known to the client.
///
/// `id` is `None` for translations produced while unauthenticated: those are
/// never persisted server-side and can never be corrected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
    pub source_text: String,
    pub translated_text: String,
    pub from_lang: String,
    pub to_lang: String,
    /// ISO 8601 timestamp as sent by the backend (may be empty)
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub is_correction: bool,
    /// Lineage: the translation this correction replaces
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub original_translation_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub user_id: Option<String>,
}

impl TranslationRecord {
    /// True when the backend holds a durable row for this record.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Parses `timestamp`, accepting RFC 3339 and the naive ISO format the
    /// backend emits (`2024-05-01T10:00:00.123456`).
    pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
        let raw = self.timestamp.trim();
        if raw.is_empty() {
            return None;
        }
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.naive_utc())
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
            .ok()
    }
}

/// Write-only payload for submitting a correction.
///
/// Built by the session controller at submission time; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionRequest {
    pub source_text: String,
    pub corrected_text: String,
    pub from_lang: String,
    pub to_lang: String,
    pub original_translation_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_at(timestamp: &str) -> TranslationRecord {
        TranslationRecord {
            id: Some("1".into()),
            source_text: "Salam".into(),
            translated_text: "Bonjour".into(),
            from_lang: "ar-TD".into(),
            to_lang: "fr".into(),
            timestamp: timestamp.into(),
            is_correction: false,
            original_translation_id: None,
            user_id: None,
        }
    }

    #[test]
    fn parses_backend_and_rfc3339_timestamps() {
        assert!(record_at("2024-05-01T10:00:00.123456").parsed_timestamp().is_some());
        assert!(record_at("2024-05-01T10:00:00").parsed_timestamp().is_some());
        assert!(record_at("2024-05-01T10:00:00+02:00").parsed_timestamp().is_some());
        assert!(record_at("").parsed_timestamp().is_none());
        assert!(record_at("yesterday").parsed_timestamp().is_none());
    }

    #[test]
    fn camel_case_blob_with_numeric_ids() {
        let json = r#"{
            "id": 5, "sourceText": "S", "translatedText": "T",
            "fromLang": "fr", "toLang": "ar-TD", "timestamp": "2024-01-01T00:00:00",
            "isCorrection": true, "originalTranslationId": 3, "userId": null
        }"#;
        let record: TranslationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id.as_deref(), Some("5"));
        assert_eq!(record.original_translation_id.as_deref(), Some("3"));
        assert!(record.user_id.is_none());
        assert!(record.is_correction);
    }
}
