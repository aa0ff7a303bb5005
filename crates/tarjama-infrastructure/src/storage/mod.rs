//! Storage layer for atomic file operations.

mod atomic_json;
mod key_value;

pub use atomic_json::{AtomicJsonError, AtomicJsonFile};
pub use key_value::{FileKeyValueStore, keys};
