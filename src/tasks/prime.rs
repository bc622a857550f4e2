//! Cache Priming Task
//!
//! Fills the cache from a full store scan before the server starts taking
//! traffic.

use tracing::info;

use crate::error::Result;
use crate::models::StoredUser;
use crate::service::UserService;

/// Scans the persistent store and writes every user into the cache.
///
/// Returns the number of users written. Not transactional: a failure partway
/// leaves the cache partially primed, which later cache misses repair.
///
/// # Example
/// ```ignore
/// let service = UserService::new(store, cache);
/// let primed = prime_cache(&service).await?;
/// ```
pub async fn prime_cache(service: &UserService) -> Result<usize> {
    let users: Vec<_> = service
        .store()
        .find_all()
        .await?
        .into_iter()
        .map(StoredUser::into_user)
        .collect();

    let primed = service.populate(&users).await?;
    info!("Cache primed with {} users", primed);
    Ok(primed)
}
