pub mod memory;
pub mod redis;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::utils::errors::Result;

/// The three-operation persistence contract a session manager expects.
///
/// Tokens are opaque, caller-supplied strings and pass through unvalidated.
/// Payloads are opaque byte sequences stored verbatim. Implementations are
/// stateless per call; concurrent saves for the same token race with
/// last-write-wins semantics at the store.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the payload for `token`, or `None` if the token was never
    /// saved, has expired, or was deleted. Absence is not an error.
    async fn find(&self, token: &str) -> Result<Option<Vec<u8>>>;

    /// Stores `data` under `token`, expiring at the absolute time `expiry`.
    /// An existing record is replaced unconditionally, value and expiry
    /// both. An expiry at or before now may make the record immediately
    /// absent; that is the store's call, not checked here.
    async fn save(&self, token: &str, data: &[u8], expiry: DateTime<Utc>) -> Result<()>;

    /// Removes the record for `token`. Deleting an absent token is not an
    /// error.
    async fn delete(&self, token: &str) -> Result<()>;
}
