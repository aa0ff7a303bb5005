//! Unified path management for tarjama files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/tarjama/           # Config directory (dirs::config_dir)
//! ├── config.toml              # Client configuration
//! ├── storage.json             # Durable key-value storage (identity, theme, guest log)
//! └── logs/                    # Application logs
//!     └── tarjama.log.YYYY-MM-DD
//! ```

use std::path::{Path, PathBuf};

const APP_DIR: &str = "tarjama";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Resolves every file tarjama reads or writes.
///
/// With a base path, everything lives directly under it (tests, `--home`);
/// otherwise under the platform config directory.
#[derive(Debug, Clone, Default)]
pub struct TarjamaPaths {
    base: Option<PathBuf>,
}

impl TarjamaPaths {
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    /// Returns the tarjama configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::ConfigDirNotFound),
        }
    }

    /// Path to config.toml.
    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Path to the durable key-value file.
    ///
    /// Holds the bearer token; keep it readable by the user only.
    pub fn storage_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("storage.json"))
    }

    /// Directory for rolling log files.
    pub fn log_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("logs"))
    }
}
