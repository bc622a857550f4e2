//! Response DTOs for the user API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::models::InsertedId;

/// Response body for POST /user
///
/// Carries the store-assigned insertion id, not the user's own id.
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserResponse {
    pub id: InsertedId,
}

impl CreateUserResponse {
    pub fn new(id: InsertedId) -> Self {
        Self { id }
    }
}

/// Generic acknowledgement for operations that report only success
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    /// Success message
    pub message: String,
}

impl StatusResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for DELETE /user/:id
#[derive(Debug, Clone, Serialize)]
pub struct DeleteUserResponse {
    /// Success message
    pub message: String,
    /// Number of persistent records removed
    pub deleted: u64,
}

impl DeleteUserResponse {
    pub fn new(deleted: u64) -> Self {
        Self {
            message: "User deleted successfully".to_string(),
            deleted,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
///
/// Both counts are read from the backends at request time.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of `user:*` keys in the cache
    pub cached_entries: usize,
    /// Number of records in the persistent store
    pub stored_entries: u64,
}

impl StatsResponse {
    pub fn new(cached_entries: usize, stored_entries: u64) -> Self {
        Self {
            cached_entries,
            stored_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
