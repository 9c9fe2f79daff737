//! Appointment domain models

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Appointment row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Appointment {
    pub id: i64,
    pub patient_id: i64,
    pub doctor_id: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub reason: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Appointment creation request. The patient id comes from the token,
/// never from the body.
#[derive(Debug, Deserialize)]
pub struct CreateAppointmentRequest {
    pub doctor_id: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub reason: String,
}

/// Appointment update request
#[derive(Debug, Deserialize)]
pub struct UpdateAppointmentRequest {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub reason: String,
}
