//! Persistent Store Module
//!
//! Durable collection of users keyed by the application-level `id`. The store
//! is the source of truth; it enforces no uniqueness on `id`.

mod memory;
mod postgres;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{InsertedId, StoredUser, User, UserPatch};

pub use memory::MemoryStore;
pub use postgres::PgStore;

// == Persistent Store Trait ==
/// Backend contract the user service needs from the durable store.
#[async_trait]
pub trait PersistentStore: Send + Sync {
    /// Inserts a new record and returns its store-assigned identifier.
    ///
    /// Inserting an `id` that already exists creates a second record.
    async fn insert(&self, user: &User) -> Result<InsertedId>;

    /// Returns the first record whose `id` matches, in insertion order.
    async fn find_one(&self, id: &str) -> Result<Option<StoredUser>>;

    /// Returns every record in insertion order.
    async fn find_all(&self) -> Result<Vec<StoredUser>>;

    /// Sets the supplied fields on the first record matching `id`.
    ///
    /// Returns the number of records matched; zero is not an error.
    async fn update_one(&self, id: &str, patch: &UserPatch) -> Result<u64>;

    /// Removes every record matching `id` and returns how many went.
    async fn delete_many(&self, id: &str) -> Result<u64>;

    /// Total number of records.
    async fn count(&self) -> Result<u64>;
}
