//! Application state shared across handlers.

use std::sync::Arc;

use notes_store::{CredentialStore, NoteRepository};

use crate::config::ServerConfig;
use crate::token::TokenService;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
/// Each clone points at the same stores.
#[derive(Clone)]
pub struct AppState {
    /// Registered users.
    users: Arc<CredentialStore>,
    /// Notes of all users.
    notes: Arc<NoteRepository>,
    /// Session token issuer/validator.
    tokens: Arc<TokenService>,
    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new application state with empty stores.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            users: Arc::new(CredentialStore::new()),
            notes: Arc::new(NoteRepository::new()),
            tokens: Arc::new(TokenService::from_config(&config)),
            config: Arc::new(config),
        }
    }

    /// Get a reference to the credential store.
    pub fn users(&self) -> &CredentialStore {
        &self.users
    }

    /// Get a reference to the note repository.
    pub fn notes(&self) -> &NoteRepository {
        &self.notes
    }

    /// Get a reference to the token service.
    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
