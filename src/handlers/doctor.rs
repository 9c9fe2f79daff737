//! Doctor HTTP handlers

use crate::{
    error::AppError,
    middleware::AppState,
    models::{auth::LoginRequest, doctor::*},
    repository::DoctorRepository,
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

/// Register a new doctor
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterDoctorRequest>,
) -> Result<impl IntoResponse, AppError> {
    let doctor = state.auth_service.register_doctor(req).await?;

    Ok((
        axum::http::StatusCode::CREATED,
        Json(json!({
            "message": "Doctor registered",
            "doctor": doctor
        })),
    ))
}

/// Doctor login
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response = state.auth_service.login_doctor(req).await?;

    Ok(Json(response))
}

/// List doctors; open to any authenticated user so patients can pick one
pub async fn list_doctors(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let repo = DoctorRepository::new(state.db.clone());
    let doctors = repo
        .list(params.limit.unwrap_or(50), params.offset.unwrap_or(0))
        .await?;

    let responses: Vec<DoctorResponse> = doctors.into_iter().map(|d| d.into()).collect();
    let count = responses.len();

    Ok(Json(json!({
        "doctors": responses,
        "count": count
    })))
}

/// Fetch a doctor profile
pub async fn get_doctor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = DoctorRepository::new(state.db.clone());
    let doctor = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Doctor"))?;

    Ok(Json(DoctorResponse::from(doctor)))
}

/// Update a doctor profile
pub async fn update_doctor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateDoctorRequest>,
) -> Result<impl IntoResponse, AppError> {
    let repo = DoctorRepository::new(state.db.clone());
    let doctor = repo
        .update(id, &req)
        .await?
        .ok_or_else(|| AppError::not_found("Doctor"))?;

    Ok(Json(json!({
        "message": "Doctor updated",
        "doctor": DoctorResponse::from(doctor)
    })))
}

/// Delete a doctor account
pub async fn delete_doctor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = DoctorRepository::new(state.db.clone());
    if !repo.delete(id).await? {
        return Err(AppError::not_found("Doctor"));
    }

    Ok(Json(json!({ "message": "Doctor deleted successfully" })))
}
