//! Core library for NoteFlow — a local-first, single-page note-taking application.
//!
//! The primary entry point is [`Session`], which binds the authoritative
//! [`NoteStore`], the transient [`EditorSession`] draft, the search query and
//! the selected [`ThemeMode`] over one [`StorageAdapter`]. A presentation
//! layer forwards user intents into `Session` and renders the snapshots and
//! [`Notice`]s it returns; nothing in this crate renders anything itself.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    editor::{Draft, EditorSession},
    error::{NoteflowError, Result},
    note::{Note, NoteId},
    session::{Notice, NoticeKind, Session},
    storage::{default_data_dir, FileStorage, MemoryStorage, StorageAdapter, NOTES_KEY, THEME_KEY},
    store::NoteStore,
    theme::{load_theme, save_theme, ThemeMode},
};
