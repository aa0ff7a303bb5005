//! Application layer for Tarjama.
//!
//! Use cases that drive the translation screen: the session controller, the
//! history selector and account management.

pub mod account_service;
pub mod history_selector;
pub mod session_controller;

pub use account_service::AccountService;
pub use history_selector::{HistorySelector, SelectionSink};
pub use session_controller::{
    SessionState, TranslateStatus, TranslateTicket, TranslationSessionController,
    UNEXPECTED_RESPONSE_MESSAGE,
};
pub use tarjama_core::translation::history::correction_context;
