//! Patient HTTP handlers

use crate::{
    error::AppError,
    middleware::AppState,
    models::{auth::LoginRequest, patient::*},
    repository::PatientRepository,
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

/// Register a new patient
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterPatientRequest>,
) -> Result<impl IntoResponse, AppError> {
    let patient = state.auth_service.register_patient(req).await?;

    Ok((
        axum::http::StatusCode::CREATED,
        Json(json!({
            "message": "Patient registered",
            "patient": patient
        })),
    ))
}

/// Patient login
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response = state.auth_service.login_patient(req).await?;

    Ok(Json(response))
}

/// List patients, for clinic staff
pub async fn list_patients(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let repo = PatientRepository::new(state.db.clone());
    let patients = repo
        .list(params.limit.unwrap_or(50), params.offset.unwrap_or(0))
        .await?;

    let responses: Vec<PatientResponse> = patients.into_iter().map(|p| p.into()).collect();
    let count = responses.len();

    Ok(Json(json!({
        "patients": responses,
        "count": count
    })))
}

/// Fetch a patient profile
pub async fn get_patient(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = PatientRepository::new(state.db.clone());
    let patient = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Patient"))?;

    Ok(Json(PatientResponse::from(patient)))
}

/// Update a patient profile
pub async fn update_patient(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdatePatientRequest>,
) -> Result<impl IntoResponse, AppError> {
    let repo = PatientRepository::new(state.db.clone());
    let patient = repo
        .update(id, &req)
        .await?
        .ok_or_else(|| AppError::not_found("Patient"))?;

    Ok(Json(json!({
        "message": "Patient updated",
        "patient": PatientResponse::from(patient)
    })))
}

/// Delete a patient account
pub async fn delete_patient(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = PatientRepository::new(state.db.clone());
    if !repo.delete(id).await? {
        return Err(AppError::not_found("Patient"));
    }

    Ok(Json(json!({ "message": "Patient deleted successfully" })))
}
