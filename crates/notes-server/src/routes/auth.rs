//! Authentication routes: register and login.
//!
//! Both routes are public. Registration stores a new user; login checks the
//! password and issues a session token.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::post,
};
use notes_core::UserProfile;
use notes_store::StoreError;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserProfile,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: UserProfile,
    pub expires_in_minutes: i64,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Minimal shape check: `local@domain.tld`, no whitespace.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, _)| !host.is_empty())
                && !domain.ends_with('.')
        }
        None => false,
    }
}

fn invalid_email() -> ApiError {
    ApiError::BadRequest("Invalid email address".to_string())
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /api/auth/register
async fn register(
    State(state): State<AppState>,
    request: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let Json(request) = request?;

    if is_blank(&request.username) || is_blank(&request.email) || request.password.is_empty() {
        return Err(ApiError::BadRequest("All fields are required".to_string()));
    }
    if !is_valid_email(&request.email) {
        return Err(invalid_email());
    }

    let user = state
        .users()
        .register(&request.username, &request.email, &request.password)
        .await
        .inspect_err(|e| {
            if let StoreError::DuplicateUser(_) = e {
                tracing::info!("Registration rejected: email already registered");
            }
        })?;

    tracing::info!(user_id = %user.id, username = %user.username, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user,
        }),
    ))
}

/// POST /api/auth/login
async fn login(
    State(state): State<AppState>,
    request: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(request) = request?;

    if is_blank(&request.email) || request.password.is_empty() {
        return Err(ApiError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }
    if !is_valid_email(&request.email) {
        return Err(invalid_email());
    }

    let user = state
        .users()
        .authenticate(&request.email, &request.password)
        .await
        .inspect_err(|e| {
            if let StoreError::InvalidCredentials = e {
                tracing::warn!("Failed login attempt");
            }
        })?;

    let tokens = state.tokens();
    let token = tokens.issue(user.id, &user.email, &user.username)?;

    tracing::info!(user_id = %user.id, username = %user.username, "User logged in");

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
        user: user.profile(),
        expires_in_minutes: tokens.ttl_minutes(),
    }))
}

/// Build auth routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
}

#[cfg(test)]
mod tests {
    use notes_core::UserId;

    use super::*;

    #[test]
    fn test_register_request_deserialize() {
        let json = r#"{"username": "alice", "email": "a@x.com", "password": "pw1"}"#;
        let request: RegisterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.username, "alice");
        assert_eq!(request.email, "a@x.com");
        assert_eq!(request.password, "pw1");
    }

    #[test]
    fn test_register_request_missing_fields_default_empty() {
        let request: RegisterRequest = serde_json::from_str(r#"{"email": "a@x.com"}"#).unwrap();
        assert!(is_blank(&request.username));
        assert!(request.password.is_empty());
    }

    #[test]
    fn test_email_shape() {
        for ok in ["a@x.com", "first.last@mail.example.org", "A+tag@X.io"] {
            assert!(is_valid_email(ok), "{ok}");
        }
        for bad in [
            "alice",
            "@x.com",
            "a@",
            "a@x",
            "a@.com",
            "a@x.com.",
            "a@b@x.com",
            "a b@x.com",
        ] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn test_login_response_serialize() {
        let response = LoginResponse {
            message: "Login successful".to_string(),
            token: "jwt.token.here".to_string(),
            user: UserProfile {
                id: UserId(1),
                username: "alice".to_string(),
                email: "a@x.com".to_string(),
            },
            expires_in_minutes: 1440,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["token"], "jwt.token.here");
        assert_eq!(json["user"]["id"], 1);
        assert_eq!(json["expiresInMinutes"], 1440);
        assert!(json["user"].get("password_hash").is_none());
    }
}
