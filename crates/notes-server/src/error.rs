//! API error types with JSON responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use notes_store::StoreError;
use serde::Serialize;

use crate::token::TokenError;

/// API error that can be returned from handlers.
///
/// The message sent to the client is always short and never includes
/// internal detail; server-side failures are logged instead.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request (400).
    #[error("{0}")]
    BadRequest(String),

    /// Unauthorized (401).
    #[error("{0}")]
    Unauthorized(String),

    /// Not found (404).
    #[error("{0}")]
    NotFound(String),

    /// Store error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Token error.
    #[error("token error: {0}")]
    Token(#[from] TokenError),
}

impl ApiError {
    /// Get the error code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Store(e) => match e {
                StoreError::DuplicateUser(_) => "DUPLICATE_USER",
                StoreError::InvalidCredentials => "INVALID_CREDENTIALS",
                StoreError::NoteNotFound(_) => "NOT_FOUND",
                StoreError::PasswordHash(_) | StoreError::Task(_) => "INTERNAL_ERROR",
            },
            Self::Token(e) => match e {
                TokenError::Expired | TokenError::Invalid(_) => "INVALID_TOKEN",
                TokenError::Signing(_) => "INTERNAL_ERROR",
            },
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(e) => match e {
                StoreError::DuplicateUser(_) => StatusCode::BAD_REQUEST,
                StoreError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                StoreError::NoteNotFound(_) => StatusCode::NOT_FOUND,
                StoreError::PasswordHash(_) | StoreError::Task(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Token(e) => match e {
                TokenError::Expired | TokenError::Invalid(_) => StatusCode::UNAUTHORIZED,
                TokenError::Signing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// The message shown to the client.
    pub fn public_message(&self) -> String {
        match self {
            Self::BadRequest(msg) | Self::Unauthorized(msg) | Self::NotFound(msg) => msg.clone(),
            Self::Store(StoreError::DuplicateUser(_)) => "User already exists".to_string(),
            Self::Store(StoreError::InvalidCredentials) => "Invalid credentials".to_string(),
            Self::Store(StoreError::NoteNotFound(_)) => "Note not found".to_string(),
            Self::Token(TokenError::Expired | TokenError::Invalid(_)) => {
                "Invalid or expired token".to_string()
            }
            _ => "Internal server error".to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code (e.g., "NOT_FOUND", "DUPLICATE_USER").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorResponse {
            code: self.code().to_string(),
            message: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use notes_core::NoteId;

    use super::*;

    #[test]
    fn test_store_error_mapping() {
        let dup = ApiError::from(StoreError::DuplicateUser("a@x.com".into()));
        assert_eq!(dup.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(dup.code(), "DUPLICATE_USER");

        let creds = ApiError::from(StoreError::InvalidCredentials);
        assert_eq!(creds.status_code(), StatusCode::UNAUTHORIZED);

        let missing = ApiError::from(StoreError::NoteNotFound(NoteId(3)));
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(missing.public_message(), "Note not found");
    }

    #[test]
    fn test_token_errors_are_unauthorized() {
        for err in [TokenError::Expired, TokenError::Invalid("bad".into())] {
            let api = ApiError::from(err);
            assert_eq!(api.status_code(), StatusCode::UNAUTHORIZED);
            assert_eq!(api.code(), "INVALID_TOKEN");
        }
        let signing = ApiError::from(TokenError::Signing("boom".into()));
        assert_eq!(signing.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_detail_not_exposed() {
        let err = ApiError::from(StoreError::PasswordHash("salt decode: bad byte 0x7f".into()));
        assert_eq!(err.public_message(), "Internal server error");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_serialize() {
        let body = ErrorResponse {
            code: "NOT_FOUND".to_string(),
            message: "Note not found".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["message"], "Note not found");
        assert_eq!(json["code"], "NOT_FOUND");
    }
}
