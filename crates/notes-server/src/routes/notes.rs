//! Note routes. Every route requires a valid session token.
//!
//! - GET /api/notes - List the caller's notes
//! - GET /api/notes/{id} - Read one note
//! - POST /api/notes - Create a note
//! - PUT /api/notes/{id} - Partially update a note
//! - DELETE /api/notes/{id} - Delete a note
//!
//! A note owned by another user answers 404, exactly like a missing one.

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    middleware,
    routing::get,
};
use notes_core::{Note, NoteId, NotePatch};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::middleware::auth::{AuthenticatedUser, require_auth};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for POST /api/notes.
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Response for DELETE /api/notes/{id}.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteNoteResponse {
    pub message: String,
}

fn not_found() -> ApiError {
    ApiError::NotFound("Note not found".to_string())
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/notes
async fn list_notes(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<Json<Vec<Note>>> {
    Ok(Json(state.notes().list_by_owner(user.user_id).await))
}

/// GET /api/notes/{id}
async fn get_note(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    id: Result<Path<NoteId>, PathRejection>,
) -> ApiResult<Json<Note>> {
    let Path(id) = id?;

    state
        .notes()
        .get_by_id_for_owner(id, user.user_id)
        .await
        .map(Json)
        .ok_or_else(not_found)
}

/// POST /api/notes
async fn create_note(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    request: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Note>)> {
    let Json(request) = request?;

    if request.title.trim().is_empty() || request.content.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Title and content are required".to_string(),
        ));
    }

    let note = state
        .notes()
        .create(user.user_id, &request.title, &request.content)
        .await;

    tracing::info!(user_id = %user.user_id, note_id = %note.id, "Note created");

    Ok((StatusCode::CREATED, Json(note)))
}

/// PUT /api/notes/{id}
async fn update_note(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    id: Result<Path<NoteId>, PathRejection>,
    patch: Result<Json<NotePatch>, JsonRejection>,
) -> ApiResult<Json<Note>> {
    let Path(id) = id?;
    let Json(patch) = patch?;

    let note = state
        .notes()
        .update_partial(id, user.user_id, patch)
        .await?;

    tracing::info!(user_id = %user.user_id, note_id = %note.id, "Note updated");

    Ok(Json(note))
}

/// DELETE /api/notes/{id}
async fn delete_note(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    id: Result<Path<NoteId>, PathRejection>,
) -> ApiResult<Json<DeleteNoteResponse>> {
    let Path(id) = id?;

    state.notes().delete(id, user.user_id).await?;

    tracing::info!(user_id = %user.user_id, note_id = %id, "Note deleted");

    Ok(Json(DeleteNoteResponse {
        message: "Note deleted successfully".to_string(),
    }))
}

/// Build note routes behind the access control middleware.
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route(
            "/api/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
