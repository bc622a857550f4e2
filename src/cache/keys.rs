//! Cache key derivation

/// Prefix of every user entry in the cache
pub const USER_KEY_PREFIX: &str = "user:";

/// Glob matching every user entry, for backends that enumerate by pattern
pub const USER_KEY_PATTERN: &str = "user:*";

/// Derives the cache key for a user id.
pub fn user_key(id: &str) -> String {
    format!("{}{}", USER_KEY_PREFIX, id)
}

/// Recovers the user id from a cache key, if it is a user key.
pub fn id_from_key(key: &str) -> Option<&str> {
    key.strip_prefix(USER_KEY_PREFIX)
}
