//! Domain and transport models for the user service
//!
//! `user` holds the entity itself; `requests` and `responses` are the DTOs
//! used for serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;
pub mod user;

// Re-export commonly used types
pub use requests::{CreateUserRequest, UpdateUserRequest};
pub use responses::{
    CreateUserResponse, DeleteUserResponse, ErrorResponse, HealthResponse, StatsResponse,
    StatusResponse,
};
pub use user::{InsertedId, StoredUser, User, UserPatch};
