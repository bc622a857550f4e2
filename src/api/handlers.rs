//! API Handlers
//!
//! HTTP request handlers for each user endpoint. Handlers validate input and
//! delegate every cache/store decision to [`UserService`].

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, warn};

use crate::cache::{CacheStore, MemoryCache, RedisCache};
use crate::config::Config;
use crate::error::{Result, ServiceError};
use crate::models::{
    CreateUserRequest, CreateUserResponse, DeleteUserResponse, HealthResponse, StatsResponse,
    StatusResponse, UpdateUserRequest, User,
};
use crate::service::UserService;
use crate::store::{MemoryStore, PersistentStore, PgStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: UserService,
}

impl AppState {
    pub fn new(service: UserService) -> Self {
        Self { service }
    }

    /// State over fresh in-memory backends.
    pub fn in_memory() -> Self {
        Self::new(UserService::new(
            Arc::new(MemoryStore::new()),
            Arc::new(MemoryCache::new()),
        ))
    }

    /// Connects the backends named by the configuration.
    ///
    /// Unset backends fall back to in-memory implementations.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let store: Arc<dyn PersistentStore> = match &config.database_url {
            Some(url) => {
                let store = PgStore::connect(url, config.db_max_connections).await?;
                store.ensure_schema().await?;
                Arc::new(store)
            }
            None => {
                warn!("DATABASE_URL not set, using a non-durable in-memory store");
                Arc::new(MemoryStore::new())
            }
        };

        let cache: Arc<dyn CacheStore> = match &config.redis_url {
            Some(url) => Arc::new(RedisCache::connect(url).await?),
            None => {
                info!("No Redis configured, using an in-process cache");
                Arc::new(MemoryCache::new())
            }
        };

        Ok(Self::new(UserService::new(store, cache)))
    }
}

/// Handler for POST /user
///
/// Responds with the store-assigned insertion id.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<CreateUserResponse>)> {
    if let Some(error_msg) = req.validate() {
        return Err(ServiceError::InvalidRequest(error_msg));
    }

    let inserted_id = state.service.create(&User::from(req)).await?;

    Ok((StatusCode::CREATED, Json(CreateUserResponse::new(inserted_id))))
}

/// Handler for GET /user/:id
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>> {
    let user = state.service.get(&id).await?;
    Ok(Json(user))
}

/// Handler for GET /users
pub async fn list_users_handler(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = state.service.list_all().await?;
    Ok(Json(users))
}

/// Handler for PUT /user/:id
///
/// Reports success whether or not a stored user matched.
pub async fn update_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<StatusResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ServiceError::InvalidRequest(error_msg));
    }

    state.service.update(&id, &req.into()).await?;

    Ok(Json(StatusResponse::new("User updated successfully")))
}

/// Handler for DELETE /user/:id
pub async fn delete_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteUserResponse>> {
    let deleted = state.service.delete(&id).await?;
    Ok(Json(DeleteUserResponse::new(deleted)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let (cached, stored) = state.service.counts().await?;
    Ok(Json(StatsResponse::new(cached, stored)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
