//! Session store trait.

use super::model::Identity;
use crate::error::Result;

/// Durable storage for the authenticated identity.
///
/// The store is the only source of truth for "is a user logged in" across a
/// process restart. Loading never contacts the backend: an expired token is
/// only detected by the next failed network call.
pub trait SessionStore: Send + Sync {
    /// Reads the stored identity.
    ///
    /// A corrupt entry is treated as absent and deleted, so the next load
    /// starts from a clean slate.
    fn load(&self) -> Result<Option<Identity>>;

    /// Stores the identity, overwriting any previous value.
    fn save(&self, identity: &Identity) -> Result<()>;

    /// Removes the stored identity and its bearer credential.
    fn clear(&self) -> Result<()>;
}
