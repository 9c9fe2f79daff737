//! Identity token generation and validation
//! Signed, time-limited bearer tokens; expiry is the sole termination
//! mechanism, there is no revocation list.

use crate::{config::AppConfig, error::AppError, models::role::Role};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

/// JWT claims for identity tokens
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (account ID)
    pub sub: String,

    /// Role, omitted for tokens issued without one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    /// Issued at
    pub iat: i64,

    /// Expiration
    pub exp: i64,
}

/// JWT service; the sole holder of the signing keys
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl_secs: u64,
}

impl JwtService {
    /// Create JWT service from config
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let secret = config.security.jwt_secret.expose_secret();

        // Ensure secret is at least 32 bytes for HS256
        if secret.len() < 32 {
            return Err(AppError::Config("JWT secret too short (min 32 chars)".to_string()));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_ttl_secs: config.security.token_ttl_secs,
        })
    }

    /// Generate an identity token for a subject, optionally carrying a role
    pub fn generate_token(
        &self,
        subject_id: i64,
        role: Option<Role>,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.token_ttl_secs as i64);

        let claims = Claims {
            sub: subject_id.to_string(),
            role,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to encode token: {:?}", e);
            AppError::Internal(format!("Failed to encode token: {}", e))
        })
    }

    /// Validate and decode a token.
    ///
    /// Malformed, tampered, and expired tokens all collapse to the single
    /// `InvalidToken` outcome so clients learn nothing about which check
    /// failed.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // No clock skew allowance; a token is invalid the instant it expires
        validation.leeway = 0;

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| {
                tracing::debug!("Token validation failed: {:?}", e);
                AppError::InvalidToken
            })?
            .claims;

        // jsonwebtoken accepts exp == now; the contract treats
        // exactly-at-expiry as already invalid
        if claims.exp <= Utc::now().timestamp() {
            return Err(AppError::InvalidToken);
        }

        Ok(claims)
    }

    /// Token lifetime in seconds, surfaced in login responses
    pub fn token_ttl_secs(&self) -> u64 {
        self.token_ttl_secs
    }
}
