//! Account use cases: login, signup, logout.
//!
//! Couples the backend's authentication endpoints with the session store. The
//! identity is read from the store once, at construction; afterwards the
//! cached value and the store change together.

use std::sync::Arc;
use tarjama_core::identity::{AuthMode, AuthOutcome, Credentials, Identity, SessionStore};
use tarjama_core::translation::BackendGateway;
use tarjama_core::{Result, TranslatorError};
use tokio::sync::RwLock;

pub struct AccountService {
    store: Arc<dyn SessionStore>,
    gateway: Arc<dyn BackendGateway>,
    current: RwLock<Option<Identity>>,
}

impl AccountService {
    /// Restores the stored identity, if any. The token is not checked
    /// against the backend.
    pub fn new(store: Arc<dyn SessionStore>, gateway: Arc<dyn BackendGateway>) -> Result<Self> {
        let current = store.load()?;
        if let Some(identity) = &current {
            tracing::debug!(user = %identity.email, "Restored session");
        }
        Ok(Self {
            store,
            gateway,
            current: RwLock::new(current),
        })
    }

    pub async fn current(&self) -> Option<Identity> {
        self.current.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }

    /// Logs in and persists the resulting identity.
    pub async fn login(&self, credentials: &Credentials) -> Result<Identity> {
        credentials.validate_for_login()?;

        let identity = match self
            .gateway
            .authenticate(credentials, AuthMode::Login)
            .await?
        {
            AuthOutcome::LoggedIn(identity) => identity,
            AuthOutcome::Registered => {
                return Err(TranslatorError::malformed("login did not return a token"));
            }
        };

        self.store.save(&identity)?;
        *self.current.write().await = Some(identity.clone());

        tracing::info!(user = %identity.email, "Logged in");
        Ok(identity)
    }

    /// Registers a new account. Nothing is stored: the user logs in next.
    pub async fn signup(&self, credentials: &Credentials, confirmation: &str) -> Result<()> {
        credentials.validate_for_signup(confirmation)?;

        self.gateway
            .authenticate(credentials, AuthMode::Signup)
            .await?;

        tracing::info!(user = %credentials.email, "Account registered");
        Ok(())
    }

    /// Forgets the identity locally. The backend is not contacted.
    pub async fn logout(&self) -> Result<()> {
        self.store.clear()?;
        let previous = self.current.write().await.take();

        if let Some(identity) = previous {
            tracing::info!(user = %identity.email, "Logged out");
        }
        Ok(())
    }
}
