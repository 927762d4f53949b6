//! Access control: resolves the caller's identity from a Bearer token.
//!
//! [`require_auth`] runs in front of every protected route. It validates the
//! token and stores an [`AuthenticatedUser`] in the request extensions;
//! handlers take `AuthenticatedUser` as an argument to read it back.
//!
//! No authorization happens here. Ownership is enforced by the note
//! repository, which scopes every operation to the resolved user id.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use notes_core::UserId;

use crate::error::ApiError;
use crate::state::AppState;

/// Identity resolved from a valid session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
    pub username: String,
}

/// Middleware that rejects requests without a valid Bearer token.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())?;

    let claims = state.tokens().validate(token).inspect_err(|e| {
        tracing::debug!(error = %e, "Token rejected");
    })?;

    let user_id = claims.id.ok_or_else(|| {
        ApiError::Unauthorized("Invalid authentication credentials".to_string())
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
        username: claims.username,
    });

    Ok(next.run(request).await)
}

/// Extract the token from `Authorization: Bearer <token>`.
fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Access token required".to_string()))?
        .to_str()
        .map_err(|_| {
            ApiError::Unauthorized("Authorization header contains invalid characters".to_string())
        })?;

    // The scheme name is case-insensitive.
    auth_header
        .trim_start()
        .split_once(char::is_whitespace)
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            ApiError::Unauthorized("Authorization header must be Bearer <token>".to_string())
        })
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| ApiError::Unauthorized("Access token required".to_string()))
    }
}
