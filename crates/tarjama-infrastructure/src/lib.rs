pub mod config_service;
pub mod guest_log;
pub mod paths;
pub mod session_store;
pub mod storage;
pub mod theme_service;

pub use crate::config_service::ConfigService;
pub use crate::guest_log::FileGuestTranslationLog;
pub use crate::paths::TarjamaPaths;
pub use crate::session_store::FileSessionStore;
pub use crate::storage::FileKeyValueStore;
pub use crate::theme_service::ThemeService;
