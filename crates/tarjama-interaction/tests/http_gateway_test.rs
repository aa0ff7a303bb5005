//! Integration tests for HttpGateway against a canned HTTP responder.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tarjama_core::TranslatorError;
use tarjama_core::identity::{AuthMode, AuthOutcome, Credentials, Identity};
use tarjama_core::translation::{BackendGateway, CorrectionRequest};
use tarjama_interaction::HttpGateway;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
struct CapturedRequest {
    request_line: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl CapturedRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// Answers every request with the same status and body, recording what it saw.
struct CannedServer {
    base_url: String,
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl CannedServer {
    async fn start(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let requests = Arc::new(Mutex::new(Vec::new()));

        let response = format!(
            "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {len}\r\nConnection: close\r\n\r\n{body}",
            reason = reason_phrase(status),
            len = body.len(),
        );

        let hits_task = hits.clone();
        let requests_task = requests.clone();
        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };
                hits_task.fetch_add(1, Ordering::SeqCst);
                if let Some(captured) = read_request(&mut stream).await {
                    requests_task.lock().await.push(captured);
                }
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        Self {
            base_url: format!("http://{addr}/api"),
            hits,
            requests,
        }
    }

    fn gateway(&self) -> HttpGateway {
        HttpGateway::new(self.base_url.clone())
    }

    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    async fn last_request(&self) -> CapturedRequest {
        self.requests.lock().await.last().cloned().unwrap()
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "CREATED",
        400 => "BAD REQUEST",
        401 => "UNAUTHORIZED",
        500 => "INTERNAL SERVER ERROR",
        _ => "UNKNOWN",
    }
}

async fn read_request(stream: &mut TcpStream) -> Option<CapturedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let request_line = lines.next()?.to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let body = String::from_utf8_lossy(&buf[header_end..]).to_string();
    Some(CapturedRequest {
        request_line,
        headers,
        body,
    })
}

fn identity() -> Identity {
    Identity::new("7", "user@example.td", "tok-123")
}

fn correction() -> CorrectionRequest {
    CorrectionRequest {
        source_text: "S".to_string(),
        corrected_text: "C".to_string(),
        from_lang: "ar-TD".to_string(),
        to_lang: "fr".to_string(),
        original_translation_id: "42".to_string(),
    }
}

#[tokio::test]
async fn test_unauthenticated_translate_sends_null_user_and_no_bearer() {
    let server = CannedServer::start(200, r#"{"translatedText": "Bonjour", "id": null}"#).await;

    let record = server
        .gateway()
        .translate("Salam", "ar-TD", "fr", None)
        .await
        .unwrap();

    assert_eq!(record.translated_text, "Bonjour");
    assert_eq!(record.id, None);
    assert_eq!(record.source_text, "Salam");
    assert_eq!(record.from_lang, "ar-TD");
    assert_eq!(record.to_lang, "fr");

    let request = server.last_request().await;
    assert!(request.request_line.starts_with("POST /api/translate "));
    assert!(request.header("authorization").is_none());

    let body = request.json();
    assert_eq!(body["source_text"], "Salam");
    assert_eq!(body["from_lang"], "ar-TD");
    assert_eq!(body["to_lang"], "fr");
    assert!(body["user_id"].is_null());
}

#[tokio::test]
async fn test_authenticated_translate_attaches_bearer_and_numeric_id() {
    let server = CannedServer::start(
        200,
        r#"{"id": 42, "sourceText": "Salam", "translatedText": "Bonjour", "fromLang": "ar-TD", "toLang": "fr", "timestamp": "2024-05-01T10:00:00", "isCorrection": false, "userId": 7}"#,
    )
    .await;

    let record = server
        .gateway()
        .translate("Salam", "ar-TD", "fr", Some(&identity()))
        .await
        .unwrap();

    assert_eq!(record.id.as_deref(), Some("42"));
    assert_eq!(record.user_id.as_deref(), Some("7"));

    let request = server.last_request().await;
    assert_eq!(request.header("authorization"), Some("Bearer tok-123"));
    assert_eq!(request.json()["user_id"], "7");
}

#[tokio::test]
async fn test_backend_error_uses_error_field() {
    let server = CannedServer::start(400, r#"{"error": "Le champ 'source_text' est vide."}"#).await;

    let err = server
        .gateway()
        .translate("x", "ar-TD", "fr", None)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        TranslatorError::backend(400, "Le champ 'source_text' est vide.")
    );
    assert_eq!(err.to_string(), "Le champ 'source_text' est vide.");
}

#[tokio::test]
async fn test_backend_error_without_body_falls_back_to_reason_phrase() {
    let server = CannedServer::start(500, "oops").await;

    let err = server
        .gateway()
        .translate("x", "ar-TD", "fr", None)
        .await
        .unwrap_err();

    assert_eq!(err, TranslatorError::backend(500, "Internal Server Error"));
}

#[tokio::test]
async fn test_missing_translated_text_is_malformed() {
    let server = CannedServer::start(200, r#"{"id": 1, "sourceText": "Salam"}"#).await;

    let err = server
        .gateway()
        .translate("Salam", "ar-TD", "fr", None)
        .await
        .unwrap_err();

    assert!(err.is_malformed());
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = HttpGateway::new(format!("http://{addr}/api"))
        .translate("Salam", "ar-TD", "fr", None)
        .await
        .unwrap_err();

    assert!(matches!(err, TranslatorError::Transport(_)));
    assert!(err.to_string().starts_with("Connection to the translation service failed"));
}

#[tokio::test]
async fn test_save_correction_without_identity_makes_no_request() {
    let server = CannedServer::start(201, "{}").await;

    let err = server
        .gateway()
        .save_correction(&correction(), None)
        .await
        .unwrap_err();

    assert!(err.is_authentication());
    assert_eq!(server.hits(), 0);
}

#[tokio::test]
async fn test_save_correction_wire_body() {
    let server = CannedServer::start(
        201,
        r#"{"id": 43, "sourceText": "S", "translatedText": "C", "fromLang": "ar-TD", "toLang": "fr", "isCorrection": true, "originalTranslationId": 42}"#,
    )
    .await;

    let saved = server
        .gateway()
        .save_correction(&correction(), Some(&identity()))
        .await
        .unwrap();

    assert_eq!(saved.id.as_deref(), Some("43"));
    assert_eq!(saved.translated_text, "C");
    assert!(saved.is_correction);
    assert_eq!(saved.original_translation_id.as_deref(), Some("42"));

    let request = server.last_request().await;
    assert!(request.request_line.starts_with("POST /api/save_correction "));
    assert_eq!(request.header("authorization"), Some("Bearer tok-123"));

    let body = request.json();
    assert_eq!(body["source_text"], "S");
    assert_eq!(body["translated_text"], "C");
    assert_eq!(body["from_lang"], "ar-TD");
    assert_eq!(body["to_lang"], "fr");
    assert_eq!(body["is_correction"], true);
    assert_eq!(body["original_translation_id"], "42");
}

#[tokio::test]
async fn test_list_history_without_identity_makes_no_request() {
    let server = CannedServer::start(200, "[]").await;

    let err = server.gateway().list_history(None).await.unwrap_err();

    assert!(err.is_authentication());
    assert_eq!(server.hits(), 0);
}

#[tokio::test]
async fn test_list_history_filters_incomplete_and_sorts_newest_first() {
    let server = CannedServer::start(
        200,
        r#"[
            {"id": 1, "sourceText": "a", "translatedText": "A", "timestamp": "2024-01-01T08:00:00"},
            {"id": 2, "sourceText": "", "translatedText": "B", "timestamp": "2024-03-01T08:00:00"},
            {"id": 3, "sourceText": "c", "translatedText": null, "timestamp": "2024-04-01T08:00:00"},
            {"id": 4, "sourceText": "d", "translatedText": "D", "timestamp": "2024-02-01T08:00:00.123456"},
            "garbage"
        ]"#,
    )
    .await;

    let history = server.gateway().list_history(Some(&identity())).await.unwrap();

    let ids: Vec<_> = history.iter().map(|r| r.id.clone().unwrap()).collect();
    assert_eq!(ids, vec!["4", "1"]);

    let request = server.last_request().await;
    assert!(request.request_line.starts_with("GET /api/get_translations "));
    assert_eq!(request.header("authorization"), Some("Bearer tok-123"));
}

#[tokio::test]
async fn test_login_returns_identity() {
    let server = CannedServer::start(
        200,
        r#"{"access_token": "jwt-abc", "user_id": 12, "email": "user@example.td"}"#,
    )
    .await;

    let outcome = server
        .gateway()
        .authenticate(&Credentials::new("user@example.td", "secret1"), AuthMode::Login)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        AuthOutcome::LoggedIn(Identity::new("12", "user@example.td", "jwt-abc"))
    );

    let request = server.last_request().await;
    assert!(request.request_line.starts_with("POST /api/auth/login "));
    assert!(request.header("authorization").is_none());
    assert_eq!(request.json()["email"], "user@example.td");
}

#[tokio::test]
async fn test_signup_returns_registered() {
    let server = CannedServer::start(201, r#"{"message": "User created successfully"}"#).await;

    let outcome = server
        .gateway()
        .authenticate(&Credentials::new("new@example.td", "secret1"), AuthMode::Signup)
        .await
        .unwrap();

    assert_eq!(outcome, AuthOutcome::Registered);
    assert!(
        server
            .last_request()
            .await
            .request_line
            .starts_with("POST /api/auth/register ")
    );
}

#[tokio::test]
async fn test_bad_credentials_surface_backend_message() {
    let server = CannedServer::start(401, r#"{"error": "Invalid credentials"}"#).await;

    let err = server
        .gateway()
        .authenticate(&Credentials::new("user@example.td", "wrong1"), AuthMode::Login)
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn test_blank_credentials_rejected_before_network() {
    let server = CannedServer::start(200, "{}").await;

    let err = server
        .gateway()
        .authenticate(&Credentials::new("", ""), AuthMode::Login)
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(server.hits(), 0);
}
