//! Error types for the storage layer.

use notes_core::NoteId;
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A user with this email is already registered.
    #[error("user already exists: {0}")]
    DuplicateUser(String),

    /// Unknown email or wrong password. The two cases are not distinguished.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Note does not exist, or belongs to another user.
    #[error("note not found: {0}")]
    NoteNotFound(NoteId),

    /// Hashing failed, or a stored hash could not be parsed.
    #[error("password hash error: {0}")]
    PasswordHash(String),

    /// A blocking hashing task panicked or was cancelled.
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
