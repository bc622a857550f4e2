//! User entity
//!
//! The application-level `id` is caller-supplied and is the only identity the
//! service uses. Store-internal identifiers never leave the store layer except
//! as the opaque [`InsertedId`] returned from a create.

use serde::{Deserialize, Serialize};

/// A user as seen by API callers and as cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Field-level update with `$set` semantics: only `Some` fields change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }

    /// Applies the supplied fields onto `user` in place.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
    }

    /// The view written to the cache after an update: `id` plus whatever
    /// fields were supplied. Returns `None` when nothing was supplied, since a
    /// user without a name is not a well-formed cache entry.
    pub fn merged_view(&self, id: &str) -> Option<User> {
        self.name.as_ref().map(|name| User::new(id, name.clone()))
    }
}

/// Opaque identifier assigned by the persistent store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InsertedId(pub String);

impl std::fmt::Display for InsertedId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A persisted record: the user plus the store's own identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUser {
    pub internal_id: InsertedId,
    pub user: User,
}

impl StoredUser {
    /// Strips the store-internal identifier.
    pub fn into_user(self) -> User {
        self.user
    }
}
