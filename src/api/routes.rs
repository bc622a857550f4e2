//! API Routes
//!
//! Configures the Axum router with all user endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_user_handler, delete_user_handler, get_user_handler, health_handler,
    list_users_handler, stats_handler, update_user_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /user` - Create a user
/// - `GET /user/:id` - Fetch a user
/// - `PUT /user/:id` - Update a user's fields
/// - `DELETE /user/:id` - Delete a user
/// - `GET /users` - List users
/// - `GET /stats` - Cached vs stored entry counts
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/user", post(create_user_handler))
        .route(
            "/user/:id",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .route("/users", get(list_users_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
