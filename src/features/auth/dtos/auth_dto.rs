use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::features::auth::model::{AuthenticatedUser, Session};

/// Credentials posted to /auth/login
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login response: bearer token plus the identity it was issued for
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub id: i64,
    pub username: String,
    pub role: String,
    #[serde(default)]
    pub admin: bool,
}

impl LoginResponse {
    pub fn into_session(self) -> Session {
        Session {
            token: self.token,
            user: AuthenticatedUser {
                id: self.id,
                username: self.username,
                role: self.role,
            },
            admin: self.admin,
        }
    }
}

/// Registration form posted to /auth/register
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 50, message = "Username must be 1-50 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    /// Confirmation field checked client-side, never sent on the wire
    #[serde(skip)]
    pub confirm_password: String,

    #[validate(length(min = 1, max = 128, message = "Name must be 1-128 characters"))]
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub id: i64,
    pub username: String,
}
