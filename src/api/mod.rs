//! API Module
//!
//! HTTP handlers and routing for the user REST API.
//!
//! # Endpoints
//! - `POST /user` - Create a user
//! - `GET /user/:id` - Fetch a user
//! - `PUT /user/:id` - Update a user
//! - `DELETE /user/:id` - Delete a user
//! - `GET /users` - List users
//! - `GET /stats` - Entry counts
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
