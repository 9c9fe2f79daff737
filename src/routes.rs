//! Route registration
//! Builds the API router and wires the auth and role-gate middleware.

use axum::{
    handler::Handler,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    auth::{jwt_auth_middleware, require_role},
    handlers,
    middleware::AppState,
    models::role::Role,
};

const PATIENT_ONLY: &[Role] = &[Role::Patient];
const DOCTOR_ONLY: &[Role] = &[Role::Doctor];
const DOCTOR_OR_ADMIN: &[Role] = &[Role::Doctor, Role::Admin];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // Public endpoints (health checks)
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check));

    // Registration and login, no token required
    let auth_routes = Router::new()
        .route("/api/v1/patients/register", post(handlers::patient::register))
        .route("/api/v1/patients/login", post(handlers::patient::login))
        .route("/api/v1/doctors/register", post(handlers::doctor::register))
        .route("/api/v1/doctors/login", post(handlers::doctor::login))
        .route("/api/v1/admins/register", post(handlers::admin::register))
        .route("/api/v1/admins/login", post(handlers::admin::login));

    // Everything below requires a valid token. Role gates are applied per
    // handler where a route's methods have different accepted-role sets.
    let authenticated_routes = Router::new()
        // Patients: the listing is a staff view
        .route(
            "/api/v1/patients",
            get(handlers::patient::list_patients.layer(from_fn(|req, next| {
                require_role(DOCTOR_OR_ADMIN, req, next)
            }))),
        )
        .route(
            "/api/v1/patients/{id}",
            get(handlers::patient::get_patient)
                .put(handlers::patient::update_patient)
                .delete(handlers::patient::delete_patient),
        )
        // Doctors: reads open to any authenticated user, mutations for staff
        .route("/api/v1/doctors", get(handlers::doctor::list_doctors))
        .route(
            "/api/v1/doctors/{id}",
            get(handlers::doctor::get_doctor)
                .put(handlers::doctor::update_doctor.layer(from_fn(|req, next| {
                    require_role(DOCTOR_OR_ADMIN, req, next)
                })))
                .delete(handlers::doctor::delete_doctor.layer(from_fn(|req, next| {
                    require_role(DOCTOR_OR_ADMIN, req, next)
                }))),
        )
        // Admins: analytics and mutations are admin only
        .route(
            "/api/v1/admins/analytics",
            get(handlers::admin::view_analytics.layer(from_fn(|req, next| {
                require_role(ADMIN_ONLY, req, next)
            }))),
        )
        .route(
            "/api/v1/admins/{id}",
            get(handlers::admin::get_admin)
                .put(handlers::admin::update_admin.layer(from_fn(|req, next| {
                    require_role(ADMIN_ONLY, req, next)
                })))
                .delete(handlers::admin::delete_admin.layer(from_fn(|req, next| {
                    require_role(ADMIN_ONLY, req, next)
                }))),
        )
        // Appointments
        .route(
            "/api/v1/appointments",
            post(handlers::appointment::create_appointment.layer(from_fn(|req, next| {
                require_role(PATIENT_ONLY, req, next)
            })))
            .get(handlers::appointment::list_appointments.layer(from_fn(|req, next| {
                require_role(DOCTOR_OR_ADMIN, req, next)
            }))),
        )
        .route(
            "/api/v1/appointments/mine",
            get(handlers::appointment::list_my_appointments.layer(from_fn(|req, next| {
                require_role(PATIENT_ONLY, req, next)
            }))),
        )
        .route(
            "/api/v1/appointments/schedule",
            get(handlers::appointment::list_doctor_schedule.layer(from_fn(|req, next| {
                require_role(DOCTOR_ONLY, req, next)
            }))),
        )
        .route(
            "/api/v1/appointments/{id}",
            get(handlers::appointment::get_appointment)
                .put(handlers::appointment::update_appointment.layer(from_fn(|req, next| {
                    require_role(PATIENT_ONLY, req, next)
                })))
                .delete(handlers::appointment::delete_appointment),
        )
        .layer(from_fn_with_state(state.jwt_service.clone(), jwt_auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(auth_routes)
        .merge(authenticated_routes)
        .layer(from_fn(crate::middleware::request_tracking_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
