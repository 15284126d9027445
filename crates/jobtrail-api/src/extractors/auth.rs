//! `AuthUser` extractor — pulls the bearer JWT from the Authorization
//! header, validates it, and injects the request context.
//!
//! Tokens are minted by the external auth service; this extractor only
//! verifies the shared-secret signature and the expected issuer.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use uuid::Uuid;

use jobtrail_core::error::AppError;
use jobtrail_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Claims carried by the access token.
#[derive(Debug, Deserialize)]
struct Claims {
    /// The user's ID.
    sub: Uuid,
    /// Display name, when the issuer includes it.
    name: Option<String>,
    /// Email address, when the issuer includes it.
    email: Option<String>,
    /// Expiry, seconds since the epoch.
    #[allow(dead_code)]
    exp: usize,
}

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        let auth = &state.config.auth;
        let mut validation = Validation::new(Algorithm::HS256);
        if !auth.issuer.is_empty() {
            validation.set_issuer(&[auth.issuer.as_str()]);
        }

        let token_data = jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(auth.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| AppError::with_source(
            jobtrail_core::error::ErrorKind::Unauthorized,
            "Invalid or expired token",
            e,
        ))?;

        let claims = token_data.claims;
        Ok(AuthUser(RequestContext::new(
            claims.sub,
            claims.name,
            claims.email,
        )))
    }
}
