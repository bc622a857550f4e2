//! User Service
//!
//! Reads are cache-aside, writes are write-through, and an empty cache on the
//! list path triggers a full repopulation. The two stores are written
//! independently: the store first, then the cache. Nothing is retried and
//! nothing is rolled back, so a failure between the two writes leaves the
//! store ahead of the cache until a later cache miss repairs it.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cache::{id_from_key, user_key, CacheStore};
use crate::error::{Result, ServiceError};
use crate::models::{InsertedId, StoredUser, User, UserPatch};
use crate::store::PersistentStore;

// == User Service ==
/// Orchestrates the cache and the persistent store for user CRUD.
///
/// Holds no mutable state of its own; cloning is cheap and clones share the
/// same backends.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn PersistentStore>,
    cache: Arc<dyn CacheStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn PersistentStore>, cache: Arc<dyn CacheStore>) -> Self {
        Self { store, cache }
    }

    pub fn store(&self) -> &Arc<dyn PersistentStore> {
        &self.store
    }

    // == Create ==
    /// Inserts `user` into the store, then writes it through to the cache.
    ///
    /// No uniqueness check is made on `user.id`. If the cache write fails the
    /// error is returned and the stored record stays in place.
    pub async fn create(&self, user: &User) -> Result<InsertedId> {
        let inserted_id = self.store.insert(user).await?;
        self.write_through(user).await?;

        debug!("Created user {} as record {}", user.id, inserted_id);
        Ok(inserted_id)
    }

    // == Get ==
    /// Returns the cached copy if present, trusted without validation.
    ///
    /// On a miss the store is consulted and a hit there repairs the cache.
    pub async fn get(&self, id: &str) -> Result<User> {
        let key = user_key(id);

        if let Some(cached) = self.cache.get(&key).await? {
            debug!("Cache hit for {}", key);
            return Ok(serde_json::from_str(&cached)?);
        }

        debug!("Cache miss for {}", key);
        let user = self
            .store
            .find_one(id)
            .await?
            .map(StoredUser::into_user)
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;

        self.write_through(&user).await?;
        info!("Repaired cache entry {}", key);

        Ok(user)
    }

    // == List All ==
    /// Returns every cached user, or falls back to a full store scan when the
    /// cache holds no user keys at all.
    ///
    /// An empty cache is read as "not yet warmed", never as "store is empty";
    /// a non-empty cache is returned as-is even if the store has diverged.
    pub async fn list_all(&self) -> Result<Vec<User>> {
        let keys = self.cache.keys().await?;

        if !keys.is_empty() {
            let values = self.cache.get_many(&keys).await?;
            let mut users = Vec::with_capacity(values.len());
            for (key, value) in keys.iter().zip(values) {
                match value {
                    Some(raw) => users.push(serde_json::from_str(&raw)?),
                    None => debug!(
                        "Cache entry for {} vanished during listing",
                        id_from_key(key).unwrap_or(key)
                    ),
                }
            }
            return Ok(users);
        }

        info!("Cache is cold, listing users from the store");
        let users: Vec<User> = self
            .store
            .find_all()
            .await?
            .into_iter()
            .map(StoredUser::into_user)
            .collect();

        self.populate(&users).await?;
        Ok(users)
    }

    // == Bulk Populate ==
    /// Writes each user to the cache under its derived key.
    ///
    /// Stops at the first failure; entries written before it stay cached.
    pub async fn populate(&self, users: &[User]) -> Result<usize> {
        for user in users {
            self.write_through(user).await?;
        }
        debug!("Populated cache with {} users", users.len());
        Ok(users.len())
    }

    // == Update ==
    /// Applies `patch` to the first stored record matching `id`, then
    /// overwrites the cache entry with `id` plus the supplied fields.
    ///
    /// The cache is written even when no record matched, which can leave a
    /// cache entry for a user the store does not have. Returns the matched
    /// count.
    pub async fn update(&self, id: &str, patch: &UserPatch) -> Result<u64> {
        let merged = patch.merged_view(id).ok_or_else(|| {
            ServiceError::InvalidRequest("Update must contain at least one field".to_string())
        })?;

        let matched = self.store.update_one(id, patch).await?;
        if matched == 0 {
            warn!(
                "Update matched no stored record for {}, caching it anyway",
                id
            );
        }

        self.write_through(&merged).await?;
        Ok(matched)
    }

    // == Delete ==
    /// Removes every stored record matching `id` and the single cache entry.
    ///
    /// Succeeds even when nothing matched. Returns the deleted record count.
    pub async fn delete(&self, id: &str) -> Result<u64> {
        let deleted = self.store.delete_many(id).await?;
        self.cache.delete(&user_key(id)).await?;

        debug!("Deleted {} stored records for {}", deleted, id);
        Ok(deleted)
    }

    // == Stats ==
    /// Current cached key count and stored record count.
    pub async fn counts(&self) -> Result<(usize, u64)> {
        let cached = self.cache.keys().await?.len();
        let stored = self.store.count().await?;
        Ok((cached, stored))
    }

    async fn write_through(&self, user: &User) -> Result<()> {
        let payload = serde_json::to_string(user)?;
        self.cache.set(&user_key(&user.id), &payload).await
    }
}
