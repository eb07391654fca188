//! Redis-backed session persistence.
//!
//! This crate adapts the three-operation storage contract a session manager
//! expects — find, save, delete — onto a Redis-compatible key-value store.
//! Session payloads are opaque byte sequences; the store itself enforces
//! expiry. The adapter holds no state beyond the configured key prefix and
//! the injected connection handle.
//!
//! ```no_run
//! use chrono::{Duration, Utc};
//! use redis_session_store::{RedisStore, SessionStore};
//!
//! # async fn run() -> redis_session_store::Result<()> {
//! let client = redis::Client::open("redis://127.0.0.1/")?;
//! let conn = client.get_connection_manager().await?;
//! let store = RedisStore::new(conn);
//!
//! store.save("token", b"payload", Utc::now() + Duration::hours(1)).await?;
//! let payload = store.find("token").await?;
//! assert_eq!(payload.as_deref(), Some(&b"payload"[..]));
//! store.delete("token").await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod storage;
pub mod utils;

// Re-export commonly used items
pub use config::StoreConfig;
pub use storage::memory::MemoryStore;
pub use storage::redis::RedisStore;
pub use storage::SessionStore;
pub use utils::errors::{Result, SessionStoreError};
