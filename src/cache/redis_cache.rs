//! Redis cache backend
//!
//! Values are stored as plain JSON strings with `SET` (no expiry). The list
//! path enumerates with `KEYS user:*` and batches reads with `MGET`.

use async_trait::async_trait;
use redis::{aio::MultiplexedConnection, AsyncCommands, Client as RedisClient};
use tracing::info;

use crate::cache::{CacheStore, USER_KEY_PATTERN};
use crate::error::Result;

// == Redis Cache ==
/// Cache backed by a shared multiplexed Redis connection.
///
/// The connection is cloned per call; clones share one socket.
#[derive(Clone)]
pub struct RedisCache {
    conn: MultiplexedConnection,
}

impl RedisCache {
    /// Opens a multiplexed connection to `redis_url`.
    pub async fn connect(redis_url: &str) -> Result<Self> {
        let client = RedisClient::open(redis_url)?;
        let conn = client.get_multiplexed_async_connection().await?;
        info!("Connected to Redis cache");
        Ok(Self { conn })
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn get_many(&self, keys: &[String]) -> Result<Vec<Option<String>>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.conn.clone();
        let values: Vec<Option<String>> = redis::cmd("MGET")
            .arg(keys)
            .query_async(&mut conn)
            .await?;
        Ok(values)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = conn.set(key, value).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = conn.del(key).await?;
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>> {
        let mut conn = self.conn.clone();
        let keys: Vec<String> = conn.keys(USER_KEY_PATTERN).await?;
        Ok(keys)
    }
}
