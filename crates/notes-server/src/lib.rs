//! notes-server: HTTP API server for the notes service
//!
//! This crate provides:
//! - Registration and login with Argon2id password hashes
//! - Stateless JWT session tokens
//! - An access control middleware for protected routes
//! - Ownership-scoped note CRUD over an in-memory store
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request ID generation and propagation
//! - CORS handling
//! - Request tracing and logging
//! - JSON error responses
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_server::{app, config::ServerConfig, state::AppState};
//!
//! let config = ServerConfig::from_env()?;
//! let cors = app::cors_layer(&config.cors_allowed_origins)?;
//! let router = app::build_app(AppState::new(config), cors);
//! axum::serve(listener, router).await?;
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod token;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
pub use token::{Claims, TokenError, TokenService};

// Re-export dependent crates
pub use notes_core;
pub use notes_store;
