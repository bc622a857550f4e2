//! In-memory cache backend
//!
//! Ordered map behind an async lock. Used when no Redis address is configured
//! and throughout the test suite.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{CacheStore, USER_KEY_PREFIX};
use crate::error::Result;

// == Memory Cache ==
/// Process-local cache with no eviction and no expiry.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryCache {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    // == Is Empty ==
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>> {
        Ok(self
            .entries
            .read()
            .await
            .keys()
            .filter(|key| key.starts_with(USER_KEY_PREFIX))
            .cloned()
            .collect())
    }
}
