//! Translation domain module.
//!
//! # Module Structure
//!
//! - `model`: `TranslationRecord` and `CorrectionRequest`
//! - `language`: supported language list and defaults
//! - `history`: ordering, filtering and correction-context helpers
//! - `gateway`: the `BackendGateway` trait
//! - `guest_log`: bounded local log for unauthenticated use

mod gateway;
mod guest_log;
pub mod history;
mod language;
mod model;

pub use gateway::BackendGateway;
pub use guest_log::{GUEST_LOG_CAPACITY, GuestTranslationLog};
pub use language::{
    DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG, Language, find_language, supported_languages,
};
pub use model::{CorrectionRequest, TranslationRecord};
