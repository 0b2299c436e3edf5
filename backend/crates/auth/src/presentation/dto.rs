//! API DTOs (Data Transfer Objects)
//!
//! Field names are snake_case on the wire. Request types carrying passwords
//! do not implement `Debug`.

use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Login
// ============================================================================

#[derive(Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub email: String,
    pub name: String,
    pub user_id: String,
    pub token: String,
}

// ============================================================================
// Users
// ============================================================================

/// Public shape of a user, used by the listing and the detail endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id.to_string(),
            name: user.name.to_string(),
            email: user.email.to_string(),
        }
    }
}

#[derive(Clone, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateUserResponse {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
}

#[derive(Clone, Deserialize)]
pub struct ChangePasswordRequest {
    pub password_old: String,
    pub password_new: String,
    pub password_confirm: String,
}

/// `{ "id": ... }` acknowledgement for update / delete / password change
#[derive(Debug, Clone, Serialize)]
pub struct IdResponse {
    pub id: String,
}
