//! Access control middleware
//! Gates protected routes behind a valid identity token and, where
//! configured, a required role set. All rejections are terminal for the
//! request and never reach business logic.

use crate::{auth::jwt::JwtService, error::AppError, models::role::Role};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Authenticated request context, attached to request extensions.
/// Request-scoped; dropped when the request completes.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: i64,
    pub role: Option<Role>,
}

// Allow handlers to take AuthContext as an extractor once the auth
// middleware has populated it.
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or(AppError::AccessDenied)
    }
}

/// Extract a bearer token from the Authorization header.
/// A missing header and a missing "Bearer " prefix both count as no token.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| s.to_string())
}

/// Authentication middleware. Resolves the identity from the bearer token
/// and attaches it to the request; halts with 403 otherwise.
pub async fn jwt_auth_middleware(
    State(jwt_service): State<Arc<JwtService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_token(req.headers()).ok_or(AppError::NoToken)?;

    let claims = jwt_service.verify(&token)?;

    // A subject that does not parse back to an account id is as useless as
    // a bad signature; same collapsed outcome
    let user_id = claims.sub.parse::<i64>().map_err(|_| AppError::InvalidToken)?;

    req.extensions_mut().insert(AuthContext {
        user_id,
        role: claims.role,
    });

    Ok(next.run(req).await)
}

/// Role check, applied after `jwt_auth_middleware`. One parameterized
/// function covers every accepted-role set a route needs.
pub async fn require_role(
    allowed: &'static [Role],
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Ordering violation: no identity was attached upstream
    let ctx = req
        .extensions()
        .get::<AuthContext>()
        .ok_or(AppError::AccessDenied)?;

    match ctx.role {
        Some(role) if allowed.contains(&role) => Ok(next.run(req).await),
        _ => {
            tracing::debug!(
                user_id = ctx.user_id,
                role = ?ctx.role,
                required = ?allowed,
                "Role check failed"
            );
            Err(AppError::InsufficientRole)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_token_valid() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Bearer test_token_123".parse().unwrap());

        assert_eq!(extract_token(&headers), Some("test_token_123".to_string()));
    }

    #[test]
    fn test_extract_token_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(extract_token(&headers), None);
    }

    #[test]
    fn test_extract_token_missing_prefix() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "test_token_123".parse().unwrap());

        assert_eq!(extract_token(&headers), None);
    }

    #[test]
    fn test_extract_token_wrong_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Basic dXNlcjpwYXNz".parse().unwrap());

        assert_eq!(extract_token(&headers), None);
    }
}
