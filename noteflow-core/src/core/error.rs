//! Error types for the NoteFlow core library.

use crate::core::note::NoteId;
use thiserror::Error;

/// All errors that can occur within the NoteFlow core library.
#[derive(Debug, Error)]
pub enum NoteflowError {
    /// Both title and content were blank when trying to save a note.
    #[error("Cannot save an empty note")]
    EmptyNote,

    /// A note ID was referenced that no longer exists in the collection.
    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),

    /// A storage key contained characters the adapter refuses to handle.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// An I/O operation on the backing store failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Note data could not be serialized to or deserialized from JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias that pins the error type to [`NoteflowError`].
pub type Result<T> = std::result::Result<T, NoteflowError>;

impl NoteflowError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyNote => "Enter a title or some content".to_string(),
            Self::NoteNotFound(_) => "Note no longer exists".to_string(),
            Self::InvalidKey(_) => "Could not access local storage".to_string(),
            Self::Io(e) => format!("Failed to save: {e}"),
            Self::Json(e) => format!("Data format error: {e}"),
        }
    }
}
