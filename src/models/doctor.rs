//! Doctor domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Doctor account row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Doctor {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub specialty: Option<String>,
    pub phone: Option<String>,
    pub experience_years: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Doctor registration request
#[derive(Debug, Deserialize)]
pub struct RegisterDoctorRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub specialty: Option<String>,
    pub phone: Option<String>,
    pub experience_years: Option<i32>,
}

/// Doctor profile update request
#[derive(Debug, Deserialize)]
pub struct UpdateDoctorRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub specialty: Option<String>,
    pub phone: Option<String>,
    pub experience_years: Option<i32>,
}

/// Doctor response (without the password hash)
#[derive(Debug, Serialize)]
pub struct DoctorResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub specialty: Option<String>,
    pub phone: Option<String>,
    pub experience_years: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<Doctor> for DoctorResponse {
    fn from(d: Doctor) -> Self {
        Self {
            id: d.id,
            first_name: d.first_name,
            last_name: d.last_name,
            email: d.email,
            specialty: d.specialty,
            phone: d.phone,
            experience_years: d.experience_years,
            created_at: d.created_at,
        }
    }
}
