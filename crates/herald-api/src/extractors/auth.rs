//! `AuthAccount` extractor — validates the bearer token and injects identity.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use herald_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated identity extracted from a validated session token.
///
/// The identity comes entirely from the token claims; no store lookup
/// happens on this path.
#[derive(Debug, Clone)]
pub struct AuthAccount {
    /// Internal account reference.
    pub account_id: Uuid,
    /// Login identifier.
    pub identifier: String,
}

impl FromRequestParts<AppState> for AuthAccount {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        let claims = state.tokens.validate(token)?;

        Ok(AuthAccount {
            account_id: claims.acc,
            identifier: claims.sub,
        })
    }
}
