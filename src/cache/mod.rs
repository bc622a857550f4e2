//! Cache Module
//!
//! Key-value cache holding serialized user snapshots under `user:<id>`.
//! Entries never expire; they are authoritative until overwritten or deleted.

mod keys;
mod memory;
mod redis_cache;

use async_trait::async_trait;

use crate::error::Result;

// Re-export public types
pub use self::keys::{id_from_key, user_key, USER_KEY_PATTERN, USER_KEY_PREFIX};
pub use self::memory::MemoryCache;
pub use self::redis_cache::RedisCache;

// == Cache Store Trait ==
/// Backend contract the user service needs from a cache.
///
/// Implementations are shared across request workers and must do their own
/// synchronization.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the raw value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Fetches several keys at once, preserving order.
    ///
    /// Keys that vanished between enumeration and fetch come back as `None`.
    async fn get_many(&self, keys: &[String]) -> Result<Vec<Option<String>>> {
        let mut values = Vec::with_capacity(keys.len());
        for key in keys {
            values.push(self.get(key).await?);
        }
        Ok(values)
    }

    /// Stores `value` under `key` with no expiry, overwriting any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Enumerates every user key currently cached.
    async fn keys(&self) -> Result<Vec<String>>;
}
