use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::aio::ConnectionLike;
use tracing::debug;

use crate::{
    config::StoreConfig,
    storage::SessionStore,
    utils::errors::Result,
};

/// Redis-backed [`SessionStore`].
///
/// Works with any cloneable async connection handle, e.g.
/// [`redis::aio::ConnectionManager`] for a single node or a cluster
/// connection behind the `cluster` feature. The handle is borrowed for the
/// store's lifetime and never closed by the store; clones share the
/// underlying transport.
pub struct RedisStore<C> {
    conn: C,
    config: StoreConfig,
}

// Tokens are bearer credentials; log only a leading fragment.
fn token_fragment(token: &str) -> &str {
    token.get(..8).unwrap_or(token)
}

impl<C> RedisStore<C>
where
    C: ConnectionLike + Clone + Send + Sync,
{
    /// Creates a store with the default key prefix. No I/O is performed.
    pub fn new(conn: C) -> Self {
        Self::with_config(conn, StoreConfig::default())
    }

    pub fn with_config(conn: C, config: StoreConfig) -> Self {
        Self { conn, config }
    }

    fn key(&self, token: &str) -> String {
        format!("{}{}", self.config.key_prefix, token)
    }
}

#[async_trait]
impl<C> SessionStore for RedisStore<C>
where
    C: ConnectionLike + Clone + Send + Sync,
{
    async fn find(&self, token: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        let data: Option<Vec<u8>> = redis::cmd("GET")
            .arg(self.key(token))
            .query_async(&mut conn)
            .await?;

        debug!(
            token = token_fragment(token),
            found = data.is_some(),
            "session lookup"
        );
        Ok(data)
    }

    async fn save(&self, token: &str, data: &[u8], expiry: DateTime<Utc>) -> Result<()> {
        let mut conn = self.conn.clone();
        let key = self.key(token);

        // SET and EXPIREAT go through one MULTI/EXEC so a reader can never
        // observe the value without its expiry.
        let _: () = redis::pipe()
            .atomic()
            .set(&key, data)
            .ignore()
            .expire_at(&key, expiry.timestamp())
            .ignore()
            .query_async(&mut conn)
            .await?;

        debug!(token = token_fragment(token), expiry = %expiry, "session saved");
        Ok(())
    }

    async fn delete(&self, token: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = redis::cmd("DEL")
            .arg(self.key(token))
            .query_async(&mut conn)
            .await?;

        debug!(token = token_fragment(token), "session deleted");
        Ok(())
    }
}
