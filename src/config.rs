//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// Backends are optional: without `DATABASE_URL` the store is kept in memory,
/// without a Redis address the cache is kept in memory.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// PostgreSQL connection string for the persistent store
    pub database_url: Option<String>,
    /// Redis connection string for the cache
    pub redis_url: Option<String>,
    /// Maximum pooled connections to the persistent store
    pub db_max_connections: u32,
    /// Whether to fill the cache from a full store scan before serving
    pub prime_cache_on_startup: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// A `.env` file in the working directory is honored if present.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `DATABASE_URL` - PostgreSQL URL (default: in-memory store)
    /// - `REDIS_URL` - Redis URL, or `REDIS_HOST` for `redis://<host>:6379`
    ///   (default: in-memory cache)
    /// - `DB_MAX_CONNECTIONS` - Store pool size (default: 10)
    /// - `PRIME_CACHE_ON_STARTUP` - Prime the cache at boot (default: true)
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable source.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            server_port: var("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            database_url: var("DATABASE_URL"),
            redis_url: var("REDIS_URL")
                .or_else(|| var("REDIS_HOST").map(|host| format!("redis://{}:6379", host))),
            db_max_connections: var("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.db_max_connections),
            prime_cache_on_startup: var("PRIME_CACHE_ON_STARTUP")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.prime_cache_on_startup),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8000,
            database_url: None,
            redis_url: None,
            db_max_connections: 10,
            prime_cache_on_startup: true,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
