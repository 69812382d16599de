//! User-session facade binding the store, editor, theme and search query.
//!
//! This is the surface a presentation layer talks to: it forwards user
//! intents in, and reads collection snapshots, the current draft, the theme
//! and transient [`Notice`]s back out. State changes propagate by explicit
//! return values, never through ambient globals.

use crate::core::editor::{Draft, EditorSession};
use crate::core::error::Result;
use crate::core::note::{Note, NoteId};
use crate::core::storage::StorageAdapter;
use crate::core::store::NoteStore;
use crate::core::theme::{load_theme, save_theme, ThemeMode};

/// Severity of a transient user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
}

/// A transient notification for the presentation layer to render, e.g. as a
/// toast. Carries no state the core depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}

/// A single user session over one storage adapter.
///
/// Owns the authoritative [`NoteStore`], the transient [`EditorSession`],
/// the active search query and the selected theme. All operations are
/// synchronous and run to completion before the next begins.
pub struct Session<S: StorageAdapter> {
    store: NoteStore<S>,
    editor: EditorSession,
    theme: ThemeMode,
    query: String,
}

impl<S: StorageAdapter> Session<S> {
    /// Rehydrates a session from `storage`: persisted notes and theme are
    /// loaded fail-soft, the editor starts closed, the search query empty.
    pub fn new(storage: S) -> Self {
        let theme = load_theme(&storage);
        Self {
            store: NoteStore::load(storage),
            editor: EditorSession::new(),
            theme,
            query: String::new(),
        }
    }

    pub fn store(&self) -> &NoteStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut NoteStore<S> {
        &mut self.store
    }

    /// Snapshot of the collection filtered by the active search query,
    /// order preserved. With an empty query this is the full collection.
    pub fn visible_notes(&self) -> Vec<Note> {
        self.store.search(&self.query)
    }

    pub fn search_query(&self) -> &str {
        &self.query
    }

    /// Sets the search query filtering [`Self::visible_notes`].
    pub fn set_search(&mut self, text: &str) {
        self.query = text.to_string();
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Switches the theme and persists the choice.
    ///
    /// # Errors
    ///
    /// Propagates adapter write failures; the in-memory selection is kept
    /// either way so the UI stays consistent with what the user picked.
    pub fn select_theme(&mut self, mode: ThemeMode) -> Result<()> {
        self.theme = mode;
        save_theme(self.store.storage_mut(), mode)
    }

    /// Opens the editor: blank draft for `None`, pre-filled edit draft for
    /// an existing note id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NoteflowError::NoteNotFound`] if `id` names a note
    /// no longer in the collection; the editor stays closed.
    pub fn open_editor(&mut self, id: Option<NoteId>) -> Result<&Draft> {
        match id {
            None => Ok(self.editor.begin(None)),
            Some(id) => {
                let note = self
                    .store
                    .get(id)
                    .ok_or(crate::NoteflowError::NoteNotFound(id))?
                    .clone();
                Ok(self.editor.begin(Some(&note)))
            }
        }
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.editor.draft()
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_open()
    }

    pub fn set_draft_title(&mut self, text: &str) {
        self.editor.set_title(text);
    }

    pub fn set_draft_content(&mut self, text: &str) {
        self.editor.set_content(text);
    }

    /// Commits the open draft. On success the editor closes and a success
    /// notice is returned; on validation failure the draft stays open and
    /// the notice is a warning for the user to correct their input.
    pub fn save_draft(&mut self) -> Notice {
        let updating = self
            .editor
            .draft()
            .is_some_and(|d| d.editing_id.is_some());

        match self.editor.commit(&mut self.store) {
            Ok(_) if updating => Notice::success("Note updated"),
            Ok(_) => Notice::success("Note saved"),
            Err(e) => Notice::warning(e.user_message()),
        }
    }

    /// Discards the open draft, if any.
    pub fn cancel_editor(&mut self) {
        self.editor.cancel();
    }

    /// Deletes the note with `id`. Deleting an absent id still reports
    /// success: the note is gone either way.
    pub fn delete(&mut self, id: NoteId) -> Notice {
        match self.store.delete(id) {
            Ok(()) => Notice::success("Note deleted"),
            Err(e) => Notice::warning(e.user_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStorage;
    use crate::NoteflowError;

    fn session() -> Session<MemoryStorage> {
        Session::new(MemoryStorage::new())
    }

    #[test]
    fn new_session_starts_empty_closed_and_light() {
        let session = session();
        assert!(session.visible_notes().is_empty());
        assert!(!session.is_editing());
        assert_eq!(session.theme(), ThemeMode::Light);
        assert_eq!(session.search_query(), "");
    }

    #[test]
    fn save_draft_creates_note_and_reports_saved() {
        let mut session = session();
        session.open_editor(None).unwrap();
        session.set_draft_title("A");
        session.set_draft_content("B");

        let notice = session.save_draft();

        assert!(notice.is_success());
        assert_eq!(notice.message, "Note saved");
        assert!(!session.is_editing());
        assert_eq!(session.visible_notes().len(), 1);
    }

    #[test]
    fn save_draft_on_existing_note_reports_updated() {
        let mut session = session();
        session.open_editor(None).unwrap();
        session.set_draft_title("old");
        session.save_draft();
        let id = session.visible_notes()[0].id;

        session.open_editor(Some(id)).unwrap();
        session.set_draft_title("new");
        let notice = session.save_draft();

        assert_eq!(notice.message, "Note updated");
        assert_eq!(session.visible_notes()[0].title, "new");
    }

    #[test]
    fn blank_draft_warns_and_keeps_editor_open() {
        let mut session = session();
        session.open_editor(None).unwrap();

        let notice = session.save_draft();

        assert_eq!(notice.kind, NoticeKind::Warning);
        assert!(session.is_editing());
        assert!(session.visible_notes().is_empty());
    }

    #[test]
    fn open_editor_for_missing_note_fails_and_stays_closed() {
        let mut session = session();
        let result = session.open_editor(Some(99));
        assert!(matches!(result, Err(NoteflowError::NoteNotFound(99))));
        assert!(!session.is_editing());
    }

    #[test]
    fn search_filters_visible_notes_without_touching_store() {
        let mut session = session();
        session.store_mut().create("Shopping", "milk").unwrap();
        session.store_mut().create("Ideas", "tests").unwrap();

        session.set_search("MILK");
        assert_eq!(session.visible_notes().len(), 1);
        assert_eq!(session.visible_notes()[0].title, "Shopping");

        session.set_search("");
        assert_eq!(session.visible_notes().len(), 2);
        assert_eq!(session.store().len(), 2);
    }

    #[test]
    fn delete_reports_success_even_for_absent_id() {
        let mut session = session();
        let notice = session.delete(42);
        assert!(notice.is_success());
        assert_eq!(notice.message, "Note deleted");
    }

    #[test]
    fn theme_selection_survives_a_new_session_on_the_same_storage() {
        let storage = {
            let mut session = session();
            session.select_theme(ThemeMode::Pink).unwrap();
            assert_eq!(session.theme(), ThemeMode::Pink);
            session.store().storage().clone()
        };

        let reloaded = Session::new(storage);
        assert_eq!(reloaded.theme(), ThemeMode::Pink);
    }

    #[test]
    fn cancel_editor_discards_pending_edits() {
        let mut session = session();
        session.open_editor(None).unwrap();
        session.set_draft_title("never saved");

        session.cancel_editor();

        assert!(!session.is_editing());
        assert!(session.visible_notes().is_empty());
    }
}
