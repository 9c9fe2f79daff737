//! Admin domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Admin account row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Admin {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Admin registration request
#[derive(Debug, Deserialize)]
pub struct RegisterAdminRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Admin profile update request
#[derive(Debug, Deserialize)]
pub struct UpdateAdminRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Admin response (without the password hash)
#[derive(Debug, Serialize)]
pub struct AdminResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<Admin> for AdminResponse {
    fn from(a: Admin) -> Self {
        Self {
            id: a.id,
            first_name: a.first_name,
            last_name: a.last_name,
            email: a.email,
            created_at: a.created_at,
        }
    }
}
