//! Admin HTTP handlers

use crate::{
    error::AppError,
    middleware::AppState,
    models::{admin::*, auth::LoginRequest},
    repository::{AdminRepository, AppointmentRepository, DoctorRepository, PatientRepository},
};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;

/// Register a new admin
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterAdminRequest>,
) -> Result<impl IntoResponse, AppError> {
    let admin = state.auth_service.register_admin(req).await?;

    Ok((
        axum::http::StatusCode::CREATED,
        Json(json!({
            "message": "Admin registered",
            "admin": admin
        })),
    ))
}

/// Admin login
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response = state.auth_service.login_admin(req).await?;

    Ok(Json(response))
}

/// Platform analytics: headline counts across the clinic
pub async fn view_analytics(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let doctors = DoctorRepository::new(state.db.clone()).count().await?;
    let patients = PatientRepository::new(state.db.clone()).count().await?;
    let appointments = AppointmentRepository::new(state.db.clone()).count().await?;

    Ok(Json(json!({
        "doctors": doctors,
        "patients": patients,
        "appointments": appointments
    })))
}

/// Fetch an admin profile
pub async fn get_admin(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = AdminRepository::new(state.db.clone());
    let admin = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Admin"))?;

    Ok(Json(AdminResponse::from(admin)))
}

/// Update an admin profile
pub async fn update_admin(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateAdminRequest>,
) -> Result<impl IntoResponse, AppError> {
    let repo = AdminRepository::new(state.db.clone());
    let admin = repo
        .update(id, &req)
        .await?
        .ok_or_else(|| AppError::not_found("Admin"))?;

    Ok(Json(json!({
        "message": "Admin updated",
        "admin": AdminResponse::from(admin)
    })))
}

/// Delete an admin account
pub async fn delete_admin(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = AdminRepository::new(state.db.clone());
    if !repo.delete(id).await? {
        return Err(AppError::not_found("Admin"));
    }

    Ok(Json(json!({ "message": "Admin deleted successfully" })))
}
