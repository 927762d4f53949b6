//! Core record types for the notes service.
//!
//! Users and notes are explicit typed records. Both are volatile: they live
//! in the in-memory stores for the lifetime of the process.
//!
//! JSON field names are camelCase to stay compatible with existing clients
//! (`userId`, `createdAt`, `updatedAt`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

// ============================================================================
// ID Types
// ============================================================================

/// Identifier of a registered user.
///
/// Assigned sequentially by the credential store, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl UserId {
    /// The first id handed out by a fresh store.
    pub const FIRST: Self = Self(1);

    /// Returns the raw integer value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the id following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Identifier of a note.
///
/// Strictly increasing for the lifetime of a repository. Ids of deleted
/// notes are never handed out again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub u64);

impl NoteId {
    /// The first id handed out by a fresh repository.
    pub const FIRST: Self = Self(1);

    /// Returns the raw integer value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the id following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

// ============================================================================
// Users
// ============================================================================

/// A stored user record, including the password hash.
///
/// This type never leaves the server: it is not `Serialize`, so the hash
/// cannot end up in a response body by accident. Use [`UserProfile`] for
/// anything sent to a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    /// Unique across the store, compared case-sensitively.
    pub email: String,
    /// PHC-format password hash.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Public projection of this user.
    #[must_use]
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }
}

/// The public view of a user returned by registration and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        user.profile()
    }
}

// ============================================================================
// Notes
// ============================================================================

/// A personal text note owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,

    /// Owner of the note. Serialized as `userId`.
    #[serde(rename = "userId")]
    pub owner_id: UserId,

    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,

    /// Refreshed by every update, even one that changes no field.
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Whether `owner` is the owner of this note.
    #[must_use]
    pub fn is_owned_by(&self, owner: UserId) -> bool {
        self.owner_id == owner
    }
}

/// Partial update of a note.
///
/// `None` means "leave unchanged"; `Some` replaces the field, even with an
/// empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl NotePatch {
    /// Patch that replaces only the title.
    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: None,
        }
    }

    /// Patch that replaces only the content.
    #[must_use]
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: Some(content.into()),
        }
    }

    /// Whether applying this patch would change no field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    /// Apply the present fields to `note` and stamp `updated_at`.
    pub fn apply(self, note: &mut Note, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(content) = self.content {
            note.content = content;
        }
        note.updated_at = now;
    }
}
