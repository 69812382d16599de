//! Internal domain modules for the NoteFlow core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod editor;
pub mod error;
pub mod note;
pub mod session;
pub mod storage;
pub mod store;
pub mod theme;

#[doc(inline)]
pub use editor::{Draft, EditorSession};
#[doc(inline)]
pub use error::{NoteflowError, Result};
#[doc(inline)]
pub use note::{Note, NoteId};
#[doc(inline)]
pub use session::{Notice, NoticeKind, Session};
#[doc(inline)]
pub use storage::{
    default_data_dir, FileStorage, MemoryStorage, StorageAdapter, NOTES_KEY, THEME_KEY,
};
#[doc(inline)]
pub use store::NoteStore;
#[doc(inline)]
pub use theme::{load_theme, save_theme, ThemeMode};
