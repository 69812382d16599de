//! Transient single-note draft staged ahead of a [`NoteStore`] commit.

use crate::core::error::Result;
use crate::core::note::{Note, NoteId};
use crate::core::store::NoteStore;
use crate::core::storage::StorageAdapter;

/// An uncommitted edit: staged title/content plus the id of the note being
/// edited, or `None` when drafting a new note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
    pub editing_id: Option<NoteId>,
}

/// Stages a single note edit or creation before committing it to the store.
///
/// The session is either closed (no draft) or open. `begin` opens it,
/// `cancel` and a successful `commit` close it; a commit that fails
/// validation leaves the draft intact so the caller can correct the input.
/// Draft mutation never touches persistence.
#[derive(Debug, Default)]
pub struct EditorSession {
    draft: Option<Draft>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the session. With a note, the draft starts as a copy of its
    /// title and content; without one, the draft is blank and will create.
    pub fn begin(&mut self, note: Option<&Note>) -> &Draft {
        self.draft.insert(match note {
            Some(note) => Draft {
                title: note.title.clone(),
                content: note.content.clone(),
                editing_id: Some(note.id),
            },
            None => Draft::default(),
        })
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    /// Returns the current draft, if the session is open.
    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    /// Replaces the draft title. No-op while the session is closed.
    pub fn set_title(&mut self, text: &str) {
        if let Some(draft) = self.draft.as_mut() {
            draft.title = text.to_string();
        }
    }

    /// Replaces the draft content. No-op while the session is closed.
    pub fn set_content(&mut self, text: &str) {
        if let Some(draft) = self.draft.as_mut() {
            draft.content = text.to_string();
        }
    }

    /// Commits the draft into `store`: create when `editing_id` is `None`,
    /// update otherwise. Success closes the session.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NoteflowError::EmptyNote`] when both fields are
    /// blank and [`crate::NoteflowError::NoteNotFound`] when the edited note
    /// has disappeared. On any error the session stays open with the draft
    /// intact.
    pub fn commit<S: StorageAdapter>(&mut self, store: &mut NoteStore<S>) -> Result<Note> {
        let Some(draft) = self.draft.as_ref() else {
            return Err(crate::NoteflowError::EmptyNote);
        };

        let note = match draft.editing_id {
            None => store.create(&draft.title, &draft.content)?,
            Some(id) => store.update(id, &draft.title, &draft.content)?,
        };
        self.draft = None;
        Ok(note)
    }

    /// Discards the draft unconditionally. No validation, no persistence.
    pub fn cancel(&mut self) {
        self.draft = None;
    }
}
