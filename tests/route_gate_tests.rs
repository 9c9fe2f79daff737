//! Role gates on the real application router
//! Uses a lazy pool that never connects: a rejected request proves the
//! gate fired before any handler or query ran, and a 500 proves the
//! request got past the gates and died only at the database.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use clinic_service::{
    auth::JwtService,
    config::{AppConfig, DatabaseConfig, LoggingConfig, SecurityConfig, ServerConfig},
    middleware::AppState,
    models::role::Role,
    routes,
    services::{AppointmentService, AuthService},
};
use http_body_util::BodyExt;
use secrecy::Secret;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

const TEST_SECRET: &str = "test-secret-key-for-testing-only-min-32-chars";

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            addr: "127.0.0.1:0".to_string(),
            graceful_shutdown_timeout_secs: 5,
        },
        database: DatabaseConfig {
            // Discard port; nothing ever listens here
            url: Secret::new("postgresql://localhost:9/unused".to_string()),
            max_connections: 2,
            min_connections: 1,
            acquire_timeout_secs: 1,
            idle_timeout_secs: 300,
            max_lifetime_secs: 1800,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        security: SecurityConfig {
            jwt_secret: Secret::new(TEST_SECRET.to_string()),
            token_ttl_secs: 3600,
        },
    }
}

fn test_app() -> (Router, Arc<JwtService>) {
    let config = test_config();

    let db = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(
            config.database.acquire_timeout_secs,
        ))
        .connect_lazy("postgresql://localhost:9/unused")
        .unwrap();

    let jwt_service = Arc::new(JwtService::from_config(&config).unwrap());
    let auth_service = Arc::new(AuthService::new(db.clone(), jwt_service.clone()));
    let appointment_service = Arc::new(AppointmentService::new(db.clone()));

    let state = Arc::new(AppState {
        config,
        db,
        jwt_service: jwt_service.clone(),
        auth_service,
        appointment_service,
    });

    (routes::create_router(state), jwt_service)
}

async fn send(
    app: Router,
    method: &str,
    uri: &str,
    token: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    use tower::ServiceExt;

    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", token));

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    (status, body)
}

#[tokio::test]
async fn analytics_rejects_non_admin_roles() {
    let (app, jwt) = test_app();
    let token = jwt.generate_token(1, Some(Role::Doctor)).unwrap();

    let (status, body) = send(app, "GET", "/api/v1/admins/analytics", &token, None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Access denied, insufficient permissions");
}

#[tokio::test]
async fn analytics_admits_admins_past_the_gate() {
    let (app, jwt) = test_app();
    let token = jwt.generate_token(1, Some(Role::Admin)).unwrap();

    // The gate lets the admin through; the unreachable database is the
    // only failure left
    let (status, _) = send(app, "GET", "/api/v1/admins/analytics", &token, None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn patient_listing_rejects_patients() {
    let (app, jwt) = test_app();
    let token = jwt.generate_token(7, Some(Role::Patient)).unwrap();

    let (status, body) = send(app, "GET", "/api/v1/patients", &token, None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Access denied, insufficient permissions");
}

#[tokio::test]
async fn patient_listing_admits_staff_past_the_gate() {
    let (app, jwt) = test_app();

    for role in [Role::Doctor, Role::Admin] {
        let token = jwt.generate_token(1, Some(role)).unwrap();

        let (status, _) = send(app.clone(), "GET", "/api/v1/patients", &token, None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "role {:?}", role);
    }
}

#[tokio::test]
async fn appointment_update_rejects_non_patients() {
    let (app, jwt) = test_app();
    let token = jwt.generate_token(1, Some(Role::Doctor)).unwrap();

    let (status, body) = send(
        app,
        "PUT",
        "/api/v1/appointments/1",
        &token,
        Some(serde_json::json!({
            "date": "2026-09-01",
            "time": "10:30:00",
            "reason": "follow-up"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Access denied, insufficient permissions");
}
