//! Configuration loading.
//!
//! Reads `config.toml`; a missing or empty file yields the defaults, and
//! `TARJAMA_API_URL` overrides the backend URL afterwards.

use std::fs;
use std::path::PathBuf;
use tarjama_core::config::ClientConfig;
use tarjama_core::{Result, TranslatorError};

#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the file without applying environment overrides.
    pub fn load_file(&self) -> Result<ClientConfig> {
        if !self.path.exists() {
            tracing::debug!("No config file at {}, using defaults", self.path.display());
            return Ok(ClientConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(ClientConfig::default());
        }

        toml::from_str(&content).map_err(|e| {
            TranslatorError::config(format!("{}: {}", self.path.display(), e))
        })
    }

    /// Loads the file and applies environment overrides.
    pub fn load(&self) -> Result<ClientConfig> {
        Ok(self.load_file()?.with_env_overrides())
    }
}
