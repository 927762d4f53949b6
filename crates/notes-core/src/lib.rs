//! notes-core: record types shared by the notes service crates.
//!
//! This crate provides:
//! - Typed ids for users and notes ([`UserId`], [`NoteId`])
//! - The stored user record and its public projection
//! - Notes and the explicit partial-update type [`NotePatch`]

pub mod types;

pub use types::{Note, NoteId, NotePatch, User, UserId, UserProfile};
