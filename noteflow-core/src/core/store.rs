//! The authoritative note collection and its persistence.

use crate::core::error::{NoteflowError, Result};
use crate::core::note::{Note, NoteId};
use crate::core::storage::{StorageAdapter, NOTES_KEY};

/// Owns the in-memory note collection and the storage adapter behind it.
///
/// `NoteStore` is the single writer to the `notes` storage key. Every
/// mutating operation persists the full collection synchronously before
/// returning, so the store on disk never lags the store in memory by more
/// than the operation in flight.
///
/// Ordering invariant: new notes are prepended (newest first); updates keep
/// their position; ids are unique and strictly increasing in creation order.
pub struct NoteStore<S: StorageAdapter> {
    storage: S,
    notes: Vec<Note>,
    last_id: NoteId,
}

impl<S: StorageAdapter> NoteStore<S> {
    /// Loads the persisted collection from `storage`.
    ///
    /// An absent key yields an empty collection. Malformed data also yields
    /// an empty collection rather than an error: losing sight of unreadable
    /// notes beats refusing to start.
    pub fn load(storage: S) -> Self {
        let notes = match storage.read_raw(NOTES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Note>>(&raw) {
                Ok(notes) => notes,
                Err(e) => {
                    log::warn!("discarding malformed note collection: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("failed to read note collection, starting empty: {e}");
                Vec::new()
            }
        };
        let last_id = notes.iter().map(|n| n.id).max().unwrap_or(0);
        Self {
            storage,
            notes,
            last_id,
        }
    }

    /// Returns the full collection, newest-created first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Fetches a single note by ID.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Returns a reference to the underlying storage adapter.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns a mutable reference to the underlying storage adapter.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Creates a new note and prepends it to the collection.
    ///
    /// # Errors
    ///
    /// Returns [`NoteflowError::EmptyNote`] if both title and content are
    /// blank after trimming, leaving the collection untouched. Persistence
    /// failures propagate as [`NoteflowError::Io`] / [`NoteflowError::Json`].
    pub fn create(&mut self, title: &str, content: &str) -> Result<Note> {
        if title.trim().is_empty() && content.trim().is_empty() {
            return Err(NoteflowError::EmptyNote);
        }

        let note = Note {
            id: self.next_id(),
            title: title.to_string(),
            content: content.to_string(),
            date: now_display(),
        };
        self.notes.insert(0, note.clone());
        self.persist()?;
        log::debug!("created note {}", note.id);
        Ok(note)
    }

    /// Replaces title, content and date of an existing note in place.
    /// The note's id and position in the collection are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`NoteflowError::NoteNotFound`] if `id` is not in the
    /// collection.
    pub fn update(&mut self, id: NoteId, title: &str, content: &str) -> Result<Note> {
        if title.trim().is_empty() && content.trim().is_empty() {
            return Err(NoteflowError::EmptyNote);
        }

        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(NoteflowError::NoteNotFound(id))?;
        note.title = title.to_string();
        note.content = content.to_string();
        note.date = now_display();
        let note = note.clone();
        self.persist()?;
        log::debug!("updated note {id}");
        Ok(note)
    }

    /// Removes the note with `id` if present. Deleting an absent id is a
    /// no-op, not an error.
    pub fn delete(&mut self, id: NoteId) -> Result<()> {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() == before {
            log::debug!("delete of absent note {id} ignored");
            return Ok(());
        }
        self.persist()?;
        log::debug!("deleted note {id}");
        Ok(())
    }

    /// Returns a snapshot of notes matching `query`, order preserved.
    /// Matching is a case-insensitive substring test on title or content;
    /// an empty query returns the full collection.
    pub fn search(&self, query: &str) -> Vec<Note> {
        self.notes
            .iter()
            .filter(|n| n.matches(query))
            .cloned()
            .collect()
    }

    /// Serializes the entire collection to the storage adapter.
    ///
    /// Called internally after every mutation; exposed so embedders can
    /// force a flush after mutating through [`Self::storage_mut`].
    pub fn persist(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.notes)?;
        self.storage.write_raw(NOTES_KEY, &raw)
    }

    /// Allocates a fresh id. Wall-clock millis, bumped past the last
    /// assigned id so two creations in the same clock tick stay distinct.
    fn next_id(&mut self) -> NoteId {
        let now = chrono::Local::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        self.last_id
    }
}

/// Human-readable local timestamp used for the `date` field.
fn now_display() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
