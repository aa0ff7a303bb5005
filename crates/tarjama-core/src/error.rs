//! Error types for the Tarjama client.

use thiserror::Error;

/// A shared error type for the entire Tarjama client.
///
/// The `Display` output of the variants a user can trigger (validation,
/// authentication, backend and transport failures) is the message rendered
/// inline by the front end, so it must stay free of secrets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslatorError {
    /// Input rejected before any network call (empty text, missing language...)
    #[error("{0}")]
    Validation(String),

    /// An operation that needs an identity was attempted without one
    #[error("Authentication required. Please log in.")]
    Authentication,

    /// The backend answered with a non-success status
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// The backend could not be reached
    #[error("Connection to the translation service failed: {0}")]
    Transport(String),

    /// The backend answered with a body of an unexpected shape
    #[error("Unexpected response from the server: {0}")]
    MalformedResponse(String),

    /// Durable storage error (file system, locking)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TranslatorError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Backend error
    pub fn backend(status: u16, message: impl Into<String>) -> Self {
        Self::Backend {
            status,
            message: message.into(),
        }
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a MalformedResponse error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an authentication error
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication)
    }

    /// Check if this is a malformed response error
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse(_))
    }

    /// Returns true when the backend rejected the bearer credential.
    ///
    /// An expired token is only detected this way; nothing validates the
    /// stored token up front.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Authentication | Self::Backend { status: 401, .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for TranslatorError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(format!("{} (kind: {:?})", err, err.kind()))
    }
}

impl From<serde_json::Error> for TranslatorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for TranslatorError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, TranslatorError>`.
pub type Result<T> = std::result::Result<T, TranslatorError>;
