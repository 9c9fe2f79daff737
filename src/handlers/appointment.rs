//! Appointment HTTP handlers
//! All routes here sit behind the auth middleware; role gates are applied
//! per route in the router.

use crate::{
    auth::middleware::AuthContext,
    error::AppError,
    middleware::AppState,
    models::appointment::*,
    repository::AppointmentRepository,
};
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Book an appointment. The patient id comes from the authenticated
/// identity, not the request body.
pub async fn create_appointment(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Json(req): Json<CreateAppointmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let appointment = state
        .appointment_service
        .create(auth_context.user_id, req)
        .await?;

    Ok((
        axum::http::StatusCode::CREATED,
        Json(json!({
            "message": "Appointment created successfully",
            "appointment": appointment
        })),
    ))
}

/// Fetch one appointment by id
pub async fn get_appointment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = AppointmentRepository::new(state.db.clone());
    let appointment = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Appointment"))?;

    Ok(Json(appointment))
}

/// Appointments of the authenticated patient
pub async fn list_my_appointments(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
) -> Result<impl IntoResponse, AppError> {
    let repo = AppointmentRepository::new(state.db.clone());
    let appointments = repo.find_by_patient(auth_context.user_id).await?;

    Ok(Json(appointments))
}

/// Schedule of the authenticated doctor
pub async fn list_doctor_schedule(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
) -> Result<impl IntoResponse, AppError> {
    let repo = AppointmentRepository::new(state.db.clone());
    let appointments = repo.find_by_doctor(auth_context.user_id).await?;

    Ok(Json(appointments))
}

/// All appointments, for clinic staff
pub async fn list_appointments(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let repo = AppointmentRepository::new(state.db.clone());
    let appointments = repo
        .list(params.limit.unwrap_or(50), params.offset.unwrap_or(0))
        .await?;
    let count = appointments.len();

    Ok(Json(json!({
        "appointments": appointments,
        "count": count
    })))
}

/// Update an appointment; only the booking patient may change it
pub async fn update_appointment(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<i64>,
    Json(req): Json<UpdateAppointmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let repo = AppointmentRepository::new(state.db.clone());
    let appointment = repo
        .update(id, auth_context.user_id, &req)
        .await?
        .ok_or_else(|| AppError::not_found("Appointment"))?;

    Ok(Json(json!({
        "message": "Appointment updated successfully",
        "appointment": appointment
    })))
}

/// Delete an appointment
pub async fn delete_appointment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = AppointmentRepository::new(state.db.clone());
    if !repo.delete(id).await? {
        return Err(AppError::not_found("Appointment"));
    }

    Ok(Json(json!({ "message": "Appointment deleted successfully" })))
}
