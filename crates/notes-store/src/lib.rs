//! notes-store: in-memory storage layer for the notes service
//!
//! This crate provides:
//! - [`CredentialStore`]: registered users with Argon2id password hashes
//! - [`NoteRepository`]: notes with ownership-scoped CRUD
//!
//! All state is volatile and lives for the lifetime of the process. Each
//! collection sits behind its own `tokio::sync::RwLock`: writes are exclusive,
//! reads run concurrently and always see whole records.
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_store::{CredentialStore, NoteRepository};
//!
//! let users = CredentialStore::new();
//! let notes = NoteRepository::new();
//!
//! let alice = users.register("alice", "a@x.com", "pw1").await?;
//! let note = notes.create(alice.id, "Title", "Body").await;
//! assert!(notes.get_by_id_for_owner(note.id, alice.id).await.is_some());
//! ```

pub mod credentials;
pub mod error;
pub mod notes;
pub mod password;

pub use credentials::CredentialStore;
pub use error::{StoreError, StoreResult};
pub use notes::NoteRepository;

// Re-export notes-core for downstream crates
pub use notes_core;
