//! Health check and service root endpoints.

use axum::{Json, Router, extract::State, routing::get};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Number of registered users.
    pub users: usize,
    /// Number of stored notes, all owners.
    pub notes: usize,
}

/// Root endpoint response.
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    /// Path of the health endpoint.
    pub health: String,
}

/// GET /api/health - Health check endpoint.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "Notes API is running".to_string(),
        timestamp: Utc::now(),
        users: state.users().count().await,
        notes: state.notes().count().await,
    })
}

/// GET / - Service banner.
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome to Notes API".to_string(),
        health: "/api/health".to_string(),
    })
}

/// Build health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health_check))
}
