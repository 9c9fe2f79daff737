//! Access control integration tests
//! Drives a real router through tower's oneshot without a database; the
//! only state is the token service.

use axum::{
    body::Body,
    handler::Handler,
    http::{Request, StatusCode},
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};
use clinic_service::{
    auth::{jwt_auth_middleware, require_role, AuthContext, Claims, JwtService},
    config::{AppConfig, DatabaseConfig, LoggingConfig, SecurityConfig, ServerConfig},
    models::role::Role,
};
use http_body_util::BodyExt;
use secrecy::Secret;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

const TEST_SECRET: &str = "test-secret-key-for-testing-only-min-32-chars";

const PATIENT_ONLY: &[Role] = &[Role::Patient];
const DOCTOR_OR_ADMIN: &[Role] = &[Role::Doctor, Role::Admin];

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            addr: "127.0.0.1:0".to_string(),
            graceful_shutdown_timeout_secs: 30,
        },
        database: DatabaseConfig {
            url: Secret::new("postgresql://localhost/test".to_string()),
            max_connections: 5,
            min_connections: 1,
            acquire_timeout_secs: 5,
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

fn jwt_service() -> Arc<JwtService> {
    Arc::new(JwtService::from_config(&test_config()).unwrap())
}

/// Router with one open authenticated route and two role-gated routes.
/// The shared counter records how many times a handler actually ran.
fn test_app(jwt: Arc<JwtService>, hits: Arc<AtomicUsize>) -> Router {
    let whoami = {
        let hits = hits.clone();
        move |ctx: AuthContext| {
            let hits = hits.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                format!("user:{}", ctx.user_id)
            }
        }
    };

    let patient_area = {
        let hits = hits.clone();
        move || {
            let hits = hits.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                "patient area"
            }
        }
    };

    let staff_area = {
        let hits = hits.clone();
        move || {
            let hits = hits.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                "staff area"
            }
        }
    };

    Router::new()
        .route("/whoami", get(whoami))
        .route(
            "/patient-area",
            get(patient_area
                .layer(from_fn(|req, next| require_role(PATIENT_ONLY, req, next)))),
        )
        .route(
            "/staff-area",
            get(staff_area
                .layer(from_fn(|req, next| require_role(DOCTOR_OR_ADMIN, req, next)))),
        )
        .layer(from_fn_with_state(jwt, jwt_auth_middleware))
}

async fn send(app: Router, uri: &str, token: Option<&str>) -> (StatusCode, serde_json::Value) {
    use tower::ServiceExt;

    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let request = builder.body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| serde_json::json!(String::from_utf8_lossy(&bytes)));

    (status, body)
}

/// Sign arbitrary claims with the test secret, bypassing the service's
/// own expiry arithmetic
fn sign_claims(claims: &Claims) -> String {
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

#[tokio::test]
async fn missing_token_is_rejected_before_handler() {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = test_app(jwt_service(), hits.clone());

    let (status, body) = send(app, "/whoami", None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Access denied, no token provided");
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn malformed_token_is_rejected() {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = test_app(jwt_service(), hits.clone());

    let (status, body) = send(app, "/whoami", Some("not-a-jwt")).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Invalid or expired token");
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = test_app(jwt_service(), hits.clone());

    let now = chrono::Utc::now().timestamp();
    let token = sign_claims(&Claims {
        sub: "42".to_string(),
        role: Some(Role::Patient),
        iat: now - 7200,
        exp: now - 3600,
    });

    let (status, body) = send(app, "/whoami", Some(&token)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Invalid or expired token");
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn non_numeric_subject_is_rejected() {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = test_app(jwt_service(), hits.clone());

    let now = chrono::Utc::now().timestamp();
    let token = sign_claims(&Claims {
        sub: "not-an-id".to_string(),
        role: Some(Role::Admin),
        iat: now,
        exp: now + 3600,
    });

    let (status, body) = send(app, "/whoami", Some(&token)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Invalid or expired token");
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn valid_token_reaches_handler_with_identity() {
    let jwt = jwt_service();
    let hits = Arc::new(AtomicUsize::new(0));
    let app = test_app(jwt.clone(), hits.clone());

    let token = jwt.generate_token(42, Some(Role::Doctor)).unwrap();
    let (status, body) = send(app, "/whoami", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!("user:42"));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn doctor_passes_staff_gate_but_not_patient_gate() {
    let jwt = jwt_service();
    let token = jwt.generate_token(42, Some(Role::Doctor)).unwrap();

    let hits = Arc::new(AtomicUsize::new(0));
    let app = test_app(jwt.clone(), hits.clone());
    let (status, _) = send(app, "/staff-area", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    let hits = Arc::new(AtomicUsize::new(0));
    let app = test_app(jwt, hits.clone());
    let (status, body) = send(app, "/patient-area", Some(&token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Access denied, insufficient permissions");
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn token_without_role_fails_role_gates() {
    let jwt = jwt_service();
    let hits = Arc::new(AtomicUsize::new(0));
    let app = test_app(jwt.clone(), hits.clone());

    let token = jwt.generate_token(7, None).unwrap();
    let (status, body) = send(app, "/patient-area", Some(&token)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Access denied, insufficient permissions");
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn role_gate_without_authentication_denies_access() {
    // Misconfigured router: the role gate runs without the auth
    // middleware in front of it
    let app = Router::new().route(
        "/gated",
        get((|| async { "never" })
            .layer(from_fn(|req, next| require_role(PATIENT_ONLY, req, next)))),
    );

    let (status, body) = send(app, "/gated", None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Access denied");
}
