//! In-memory persistent store
//!
//! Not durable across restarts. Backs the test suite and local runs without
//! `DATABASE_URL`.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{InsertedId, StoredUser, User, UserPatch};
use crate::store::PersistentStore;

/// Insertion-ordered record list behind an async lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<StoredUser>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-filled with `users`, each under a fresh internal id.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let records = users
            .into_iter()
            .map(|user| StoredUser {
                internal_id: new_internal_id(),
                user,
            })
            .collect();
        Self {
            records: RwLock::new(records),
        }
    }
}

fn new_internal_id() -> InsertedId {
    InsertedId(Uuid::new_v4().simple().to_string())
}

#[async_trait]
impl PersistentStore for MemoryStore {
    async fn insert(&self, user: &User) -> Result<InsertedId> {
        let internal_id = new_internal_id();
        self.records.write().await.push(StoredUser {
            internal_id: internal_id.clone(),
            user: user.clone(),
        });
        Ok(internal_id)
    }

    async fn find_one(&self, id: &str) -> Result<Option<StoredUser>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|record| record.user.id == id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<StoredUser>> {
        Ok(self.records.read().await.clone())
    }

    async fn update_one(&self, id: &str, patch: &UserPatch) -> Result<u64> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|record| record.user.id == id) {
            Some(record) => {
                patch.apply_to(&mut record.user);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_many(&self, id: &str) -> Result<u64> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|record| record.user.id != id);
        Ok((before - records.len()) as u64)
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.records.read().await.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_distinct_internal_ids() {
        let store = MemoryStore::new();

        let a = store.insert(&User::new("1", "a")).await.unwrap();
        let b = store.insert(&User::new("1", "b")).await.unwrap();

        assert_ne!(a, b);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_find_one_returns_first_match() {
        let store = MemoryStore::new();
        store.insert(&User::new("1", "first")).await.unwrap();
        store.insert(&User::new("1", "second")).await.unwrap();

        let found = store.find_one("1").await.unwrap().unwrap();
        assert_eq!(found.user.name, "first");
        assert!(store.find_one("2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_one_touches_only_first_match() {
        let store = MemoryStore::with_users([User::new("1", "a"), User::new("1", "b")]);

        let patch = UserPatch {
            name: Some("z".into()),
        };
        assert_eq!(store.update_one("1", &patch).await.unwrap(), 1);

        let names: Vec<_> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.user.name)
            .collect();
        assert_eq!(names, vec!["z", "b"]);
    }

    #[tokio::test]
    async fn test_update_one_missing_reports_zero() {
        let store = MemoryStore::new();
        let patch = UserPatch {
            name: Some("z".into()),
        };
        assert_eq!(store.update_one("nope", &patch).await.unwrap(), 0);
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_many_removes_all_matches() {
        let store = MemoryStore::with_users([
            User::new("1", "a"),
            User::new("2", "b"),
            User::new("1", "c"),
        ]);

        assert_eq!(store.delete_many("1").await.unwrap(), 2);
        assert_eq!(store.delete_many("1").await.unwrap(), 0);

        let remaining = store.find_all().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].user, User::new("2", "b"));
    }
}
