use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::{
    config::StoreConfig,
    storage::SessionStore,
    utils::errors::Result,
};

/// In-memory [`SessionStore`] for tests and local development.
///
/// Expiry is enforced lazily: an expired record reads as absent and is
/// dropped on access. Keys use the same `prefix + token` derivation as the
/// Redis store so both backends honor the same contract.
#[derive(Debug)]
pub struct MemoryStore {
    sessions: Arc<DashMap<String, StoredSession>>,
    config: StoreConfig,
}

#[derive(Debug, Clone)]
struct StoredSession {
    data: Vec<u8>,
    expires_at: DateTime<Utc>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            config,
        }
    }

    fn key(&self, token: &str) -> String {
        format!("{}{}", self.config.key_prefix, token)
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn find(&self, token: &str) -> Result<Option<Vec<u8>>> {
        let key = self.key(token);
        let data = match self.sessions.get(&key) {
            Some(entry) if entry.expires_at > Utc::now() => Some(entry.data.clone()),
            Some(_) => None,
            None => return Ok(None),
        };
        if data.is_none() {
            self.sessions.remove(&key);
        }
        Ok(data)
    }

    async fn save(&self, token: &str, data: &[u8], expiry: DateTime<Utc>) -> Result<()> {
        self.sessions.insert(
            self.key(token),
            StoredSession {
                data: data.to_vec(),
                expires_at: expiry,
            },
        );
        Ok(())
    }

    async fn delete(&self, token: &str) -> Result<()> {
        self.sessions.remove(&self.key(token));
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
