//! Identity domain module.
//!
//! # Module Structure
//!
//! - `model`: Identity, credentials and authentication outcomes
//! - `store`: Session store trait for durable identity persistence

mod model;
mod store;

pub use model::{AuthMode, AuthOutcome, Credentials, Identity, MIN_PASSWORD_LEN};
pub use store::SessionStore;
