//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::CurrentUser;
use crate::domain::entity::user::User;

// ============================================================================
// Registration
// ============================================================================

/// Registration request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    #[serde(default)]
    pub name: String,
    pub password: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request; a missing field is a failed login, not a bad body
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub name: String,
}

// ============================================================================
// Users
// ============================================================================

/// Public view of a user. Never carries the credential hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.user_id.to_string(),
            username: user.user_name.into_inner(),
            name: user.name,
        }
    }
}

impl From<CurrentUser> for UserResponse {
    fn from(user: CurrentUser) -> Self {
        Self {
            id: user.user_id.to_string(),
            username: user.user_name,
            name: user.name,
        }
    }
}
