//! Note repository with ownership-scoped CRUD.
//!
//! Every operation takes the caller's [`UserId`]. A note owned by someone
//! else is indistinguishable from a note that does not exist: lookups return
//! `None` and mutations fail with [`StoreError::NoteNotFound`] in both cases.

use chrono::Utc;
use notes_core::{Note, NoteId, NotePatch, UserId};
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};

/// In-memory collection of notes for all users.
#[derive(Debug, Default)]
pub struct NoteRepository {
    inner: RwLock<NoteTable>,
}

/// Notes in insertion order.
///
/// Ids are assigned in increasing order and appended, so `notes` is always
/// sorted by id. Removal keeps the order and never touches `next_id`.
#[derive(Debug)]
struct NoteTable {
    notes: Vec<Note>,
    next_id: NoteId,
}

impl Default for NoteTable {
    fn default() -> Self {
        Self {
            notes: Vec::new(),
            next_id: NoteId::FIRST,
        }
    }
}

impl NoteTable {
    /// Index of note `id` if it is owned by `owner`.
    fn position(&self, id: NoteId, owner: UserId) -> Option<usize> {
        self.notes
            .binary_search_by_key(&id, |note| note.id)
            .ok()
            .filter(|&index| self.notes[index].is_owned_by(owner))
    }
}

impl NoteRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// All notes owned by `owner`, in insertion order.
    pub async fn list_by_owner(&self, owner: UserId) -> Vec<Note> {
        self.inner
            .read()
            .await
            .notes
            .iter()
            .filter(|note| note.is_owned_by(owner))
            .cloned()
            .collect()
    }

    /// Note `id` if it exists and is owned by `owner`.
    pub async fn get_by_id_for_owner(&self, id: NoteId, owner: UserId) -> Option<Note> {
        let table = self.inner.read().await;
        table.position(id, owner).map(|index| table.notes[index].clone())
    }

    /// Create a note for `owner` with the next id.
    pub async fn create(&self, owner: UserId, title: &str, content: &str) -> Note {
        let mut table = self.inner.write().await;

        let id = table.next_id;
        table.next_id = id.next();

        let now = Utc::now();
        let note = Note {
            id,
            owner_id: owner,
            title: title.to_string(),
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        };
        table.notes.push(note.clone());

        note
    }

    /// Apply `patch` to note `id` owned by `owner`.
    ///
    /// Only fields present in the patch change. `updated_at` is refreshed
    /// even when the patch is empty.
    pub async fn update_partial(
        &self,
        id: NoteId,
        owner: UserId,
        patch: NotePatch,
    ) -> StoreResult<Note> {
        let mut table = self.inner.write().await;
        let index = table
            .position(id, owner)
            .ok_or(StoreError::NoteNotFound(id))?;

        let note = &mut table.notes[index];
        patch.apply(note, Utc::now());
        Ok(note.clone())
    }

    /// Remove note `id` owned by `owner`.
    ///
    /// Returns `Ok(true)` on removal. Other notes keep their ids.
    pub async fn delete(&self, id: NoteId, owner: UserId) -> StoreResult<bool> {
        let mut table = self.inner.write().await;
        let index = table
            .position(id, owner)
            .ok_or(StoreError::NoteNotFound(id))?;

        table.notes.remove(index);
        Ok(true)
    }

    /// Total number of notes across all owners.
    pub async fn count(&self) -> usize {
        self.inner.read().await.notes.len()
    }
}
