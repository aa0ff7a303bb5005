//! Identity domain model.
//!
//! Represents the authenticated user and the credentials used to obtain it.

use crate::error::{Result, TranslatorError};
use crate::id_format::deserialize_id;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum password length accepted at signup.
pub const MIN_PASSWORD_LEN: usize = 6;

/// The authenticated user's id, email and bearer credential.
///
/// Created on successful login, held only in the session store and destroyed
/// on logout. Whenever an identity is present, every network call attaches
/// `token` as a bearer credential.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Backend user id (numeric ids are kept as their decimal string)
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// User's email address
    pub email: String,
    /// Bearer token issued by the backend
    pub token: String,
}

impl Identity {
    pub fn new(id: impl Into<String>, email: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            token: token.into(),
        }
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

// The token never reaches logs.
impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Which authentication endpoint to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    Login,
    Signup,
}

/// Result of a successful authentication round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Login succeeded; the identity must be persisted by the caller.
    LoggedIn(Identity),
    /// Signup succeeded. Nothing is stored; the user has to log in next.
    Registered,
}

/// Email/password pair typed by the user.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Checks the fields required by both login and signup.
    pub fn validate_for_login(&self) -> Result<()> {
        if self.email.trim().is_empty() || self.password.trim().is_empty() {
            return Err(TranslatorError::validation("Please fill in all fields."));
        }
        Ok(())
    }

    /// Checks the signup rules: confirmation must match and the password must
    /// be at least [`MIN_PASSWORD_LEN`] characters long.
    pub fn validate_for_signup(&self, confirmation: &str) -> Result<()> {
        self.validate_for_login()?;
        if self.password != confirmation {
            return Err(TranslatorError::validation("Passwords do not match."));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(TranslatorError::validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters long."
            )));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_secrets() {
        let identity = Identity::new("7", "a@b.td", "secret-token");
        let printed = format!("{identity:?}");
        assert!(!printed.contains("secret-token"));
        assert!(printed.contains("a@b.td"));

        let creds = Credentials::new("a@b.td", "hunter22");
        assert!(!format!("{creds:?}").contains("hunter22"));
    }

    #[test]
    fn identity_blob_accepts_numeric_user_id() {
        let identity: Identity =
            serde_json::from_str(r#"{"id": 12, "email": "a@b.td", "token": "t"}"#).unwrap();
        assert_eq!(identity.id, "12");
        assert_eq!(identity.bearer(), "Bearer t");
    }

    #[test]
    fn login_requires_both_fields() {
        assert!(Credentials::new("", "pw").validate_for_login().is_err());
        assert!(Credentials::new("a@b.td", "  ").validate_for_login().is_err());
        assert!(Credentials::new("a@b.td", "pw").validate_for_login().is_ok());
    }

    #[test]
    fn signup_checks_confirmation_and_length() {
        let short = Credentials::new("a@b.td", "abc");
        assert!(short.validate_for_signup("abc").unwrap_err().is_validation());

        let mismatch = Credentials::new("a@b.td", "abcdef");
        let err = mismatch.validate_for_signup("abcdeg").unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match.");

        let ok = Credentials::new("a@b.td", "abcdef");
        assert!(ok.validate_for_signup("abcdef").is_ok());
    }
}
