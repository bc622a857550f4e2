//! Error types for the user service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Service Error Enum ==
/// Unified error type for the user service and its backends.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// No user with this id in either the cache or the store
    #[error("User not found: {0}")]
    NotFound(String),

    /// The persistent store rejected or failed the operation
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// The cache rejected or failed the operation
    #[error("Cache unavailable: {0}")]
    CacheUnavailable(String),

    /// A cached or submitted payload could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::Serialization(err.to_string())
    }
}

impl From<redis::RedisError> for ServiceError {
    fn from(err: redis::RedisError) -> Self {
        ServiceError::CacheUnavailable(err.to_string())
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        ServiceError::StoreUnavailable(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServiceError::CacheUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServiceError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the user service.
pub type Result<T> = std::result::Result<T, ServiceError>;
