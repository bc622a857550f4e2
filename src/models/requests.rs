//! Request DTOs for the user API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::models::{User, UserPatch};

/// Request body for creating a user (POST /user)
///
/// # Fields
/// - `id`: Caller-assigned identity; not checked for uniqueness
/// - `name`: Display name
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub id: String,
    pub name: String,
}

impl CreateUserRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.id.is_empty() {
            return Some("User id cannot be empty".to_string());
        }
        if self.name.is_empty() {
            return Some("User name cannot be empty".to_string());
        }
        None
    }
}

impl From<CreateUserRequest> for User {
    fn from(req: CreateUserRequest) -> Self {
        User::new(req.id, req.name)
    }
}

/// Request body for updating a user (PUT /user/:id)
///
/// Every field is optional; only supplied fields are written.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
}

impl UpdateUserRequest {
    pub fn validate(&self) -> Option<String> {
        match &self.name {
            None => Some("Update must contain at least one field".to_string()),
            Some(name) if name.is_empty() => Some("User name cannot be empty".to_string()),
            Some(_) => None,
        }
    }
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        UserPatch { name: req.name }
    }
}
