//! HttpGateway - REST client for the translation backend.
//!
//! Speaks the Flask API (`/translate`, `/save_correction`, `/get_translations`,
//! `/auth/login`, `/auth/register`). Every failure is turned into a
//! `TranslatorError` whose `Display` is fit for inline rendering.

use crate::wire::{
    CredentialsRequest, ErrorBody, LoginResponse, RecordFallback, SaveCorrectionRequest,
    TranslateRequest, TranslationObject,
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tarjama_core::config::{BackendConfig, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS};
use tarjama_core::identity::{AuthMode, AuthOutcome, Credentials, Identity};
use tarjama_core::translation::history::sort_most_recent_first;
use tarjama_core::translation::{BackendGateway, CorrectionRequest, TranslationRecord};
use tarjama_core::{Result, TranslatorError};

/// Gateway implementation that talks to the backend over HTTP.
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpGateway {
    /// Creates a gateway for `base_url` (e.g. `http://localhost:5000/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(config.base_url.clone()).with_timeout(Duration::from_secs(config.timeout_secs))
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn authorized(request: RequestBuilder, identity: Option<&Identity>) -> RequestBuilder {
        match identity {
            Some(identity) => request.header("Authorization", identity.bearer()),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder, operation: &str) -> Result<Response> {
        let response = request
            .header("Accept", "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("{} request failed: {}", operation, e);
                transport_error(&e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let err = error_from_response(status, response).await;
            tracing::warn!("{} rejected ({}): {}", operation, status, err);
            return Err(err);
        }

        Ok(response)
    }
}

/// Extracts `{ "error": ... }` from a failed response, falling back to the
/// status line's reason phrase.
async fn error_from_response(status: StatusCode, response: Response) -> TranslatorError {
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| status_text(status));
    TranslatorError::backend(status.as_u16(), message)
}

fn transport_error(err: &reqwest::Error) -> TranslatorError {
    if err.is_timeout() {
        TranslatorError::transport("the request timed out")
    } else {
        TranslatorError::transport("the server is unreachable")
    }
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response
        .text()
        .await
        .map_err(|e| TranslatorError::transport(format!("failed to read response body: {e}")))?;
    serde_json::from_str(&body).map_err(|e| TranslatorError::malformed(e.to_string()))
}

#[async_trait]
impl BackendGateway for HttpGateway {
    async fn translate(
        &self,
        text: &str,
        from_lang: &str,
        to_lang: &str,
        identity: Option<&Identity>,
    ) -> Result<TranslationRecord> {
        tracing::debug!(
            from_lang,
            to_lang,
            authenticated = identity.is_some(),
            "POST /translate"
        );

        let body = TranslateRequest {
            source_text: text,
            from_lang,
            to_lang,
            user_id: identity.map(|i| i.id.as_str()),
        };
        let request = Self::authorized(self.client.post(self.endpoint("translate")), identity).json(&body);
        let response = self.send(request, "translate").await?;

        let object: TranslationObject = decode(response).await?;
        object.into_record(RecordFallback {
            source_text: text,
            from_lang,
            to_lang,
        })
    }

    async fn save_correction(
        &self,
        request: &CorrectionRequest,
        identity: Option<&Identity>,
    ) -> Result<TranslationRecord> {
        let Some(identity) = identity else {
            return Err(TranslatorError::Authentication);
        };

        tracing::debug!(
            original_translation_id = %request.original_translation_id,
            "POST /save_correction"
        );

        let body = SaveCorrectionRequest::from(request);
        let http = Self::authorized(self.client.post(self.endpoint("save_correction")), Some(identity))
            .json(&body);
        let response = self.send(http, "save_correction").await?;

        let object: TranslationObject = decode(response).await?;
        let mut record = object.into_record(RecordFallback {
            source_text: &request.source_text,
            from_lang: &request.from_lang,
            to_lang: &request.to_lang,
        })?;
        record.is_correction = true;
        if record.original_translation_id.is_none() {
            record.original_translation_id = Some(request.original_translation_id.clone());
        }
        Ok(record)
    }

    async fn list_history(&self, identity: Option<&Identity>) -> Result<Vec<TranslationRecord>> {
        let Some(identity) = identity else {
            return Err(TranslatorError::Authentication);
        };

        tracing::debug!("GET /get_translations");

        let http = Self::authorized(self.client.get(self.endpoint("get_translations")), Some(identity));
        let response = self.send(http, "get_translations").await?;

        let entries: Vec<serde_json::Value> = decode(response).await?;
        let total = entries.len();
        let mut records: Vec<TranslationRecord> = entries
            .into_iter()
            .filter_map(|value| serde_json::from_value::<TranslationObject>(value).ok())
            .filter_map(TranslationObject::into_history_record)
            .collect();

        if records.len() != total {
            tracing::debug!("Dropped {} incomplete history entries", total - records.len());
        }

        sort_most_recent_first(&mut records);
        Ok(records)
    }

    async fn authenticate(&self, credentials: &Credentials, mode: AuthMode) -> Result<AuthOutcome> {
        credentials.validate_for_login()?;

        let body = CredentialsRequest {
            email: &credentials.email,
            password: &credentials.password,
        };

        match mode {
            AuthMode::Login => {
                tracing::debug!("POST /auth/login");
                let http = self.client.post(self.endpoint("auth/login")).json(&body);
                let response = self.send(http, "login").await?;
                let login: LoginResponse = decode(response).await?;
                Ok(AuthOutcome::LoggedIn(Identity::new(
                    login.user_id,
                    login.email,
                    login.access_token,
                )))
            }
            AuthMode::Signup => {
                tracing::debug!("POST /auth/register");
                let http = self.client.post(self.endpoint("auth/register")).json(&body);
                self.send(http, "register").await?;
                Ok(AuthOutcome::Registered)
            }
        }
    }
}

impl Default for HttpGateway {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
