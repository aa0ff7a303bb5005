//! Local log of translations made without an account.

use super::model::TranslationRecord;
use crate::error::Result;

/// Maximum number of entries kept in the guest log.
pub const GUEST_LOG_CAPACITY: usize = 50;

/// Bounded, newest-first log of unauthenticated translations.
pub trait GuestTranslationLog: Send + Sync {
    /// Prepends `record`, dropping the oldest entries beyond
    /// [`GUEST_LOG_CAPACITY`].
    fn record(&self, record: &TranslationRecord) -> Result<()>;

    /// Returns the logged entries, newest first. Unreadable data reads as
    /// an empty log.
    fn entries(&self) -> Vec<TranslationRecord>;
}
