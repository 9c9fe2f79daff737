//! Authentication-related models

use serde::{Deserialize, Serialize};

/// Login request, shared by all three account kinds
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response carrying the bearer token and the account profile
#[derive(Debug, Serialize)]
pub struct LoginResponse<U> {
    pub token: String,
    pub expires_in: u64,
    pub user: U,
}
