use serde::{Deserialize, Serialize};

/// Identifier assigned at creation time, derived from epoch milliseconds.
pub type NoteId = i64;

/// A single user-authored note.
///
/// `id` is immutable after creation; `date` is refreshed on every save and
/// holds a human-readable local timestamp rather than a machine epoch, since
/// it is only ever displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub date: String,
}

impl Note {
    /// True when both title and content are blank after trimming whitespace.
    /// Blank notes are rejected at the save boundary, not at construction.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }

    /// Case-insensitive substring match against title or content.
    /// An empty query matches every note.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query) || self.content.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(title: &str, content: &str) -> Note {
        Note {
            id: 1,
            title: title.to_string(),
            content: content.to_string(),
            date: "2026-08-25 10:00:00".to_string(),
        }
    }

    #[test]
    fn blank_note_detected_after_trimming() {
        assert!(note("", "").is_blank());
        assert!(note("   ", "\n").is_blank());
        assert!(!note("A", "").is_blank());
        assert!(!note("", "B").is_blank());
    }

    #[test]
    fn match_is_case_insensitive_on_both_fields() {
        let n = note("Shopping", "milk");
        assert!(n.matches("MILK"));
        assert!(n.matches("shop"));
        assert!(!n.matches("bread"));
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(note("", "").matches(""));
    }
}
