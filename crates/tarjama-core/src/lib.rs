pub mod config;
pub mod error;
pub mod id_format;
pub mod identity;
pub mod theme;
pub mod translation;

// Re-export common error type
pub use error::{Result, TranslatorError};
