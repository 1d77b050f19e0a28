use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated user record as returned by the auth endpoints.
///
/// Cached client-side for fast rendering only; authorization is always
/// re-validated against the profile endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_executive(&self) -> bool {
        self.role_name == "executive"
    }

    pub fn is_production(&self) -> bool {
        self.role_name == "production"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
