//! Cached CRUD - A user API over a durable store and a key-value cache
//!
//! Reads are cache-aside, writes go to the store and then the cache as two
//! independent writes, and a cold cache is backfilled from a full store scan.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use error::{Result, ServiceError};
pub use service::UserService;
pub use tasks::prime_cache;
