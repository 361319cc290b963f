//! Note model representing a free-text tagged note.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A tagged note with an author.
///
/// Notes belong to the whole address book rather than to any one contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Note {
    /// The note text
    pub text: String,

    /// Who wrote the note
    pub author: String,

    /// Tags in the order given; duplicates are kept
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Note {
    /// Create a new note.
    pub fn new(author: impl Into<String>, text: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            tags,
        }
    }

    /// Whether the note carries `tag` (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (by {}, Tags: {})",
            self.text,
            self.author,
            self.tags.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_new() {
        let note = Note::new("alice", "Buy a sled", vec!["gift".to_string()]);
        assert_eq!(note.author, "alice");
        assert_eq!(note.text, "Buy a sled");
        assert_eq!(note.tags, vec!["gift"]);
    }

    #[test]
    fn test_note_display() {
        let note = Note::new(
            "alice",
            "Buy a sled",
            vec!["gift".to_string(), "winter".to_string()],
        );
        assert_eq!(note.to_string(), "Buy a sled (by alice, Tags: gift, winter)");

        let untagged = Note::new("bob", "Call mum", Vec::new());
        assert_eq!(untagged.to_string(), "Call mum (by bob, Tags: )");
    }

    #[test]
    fn test_note_has_tag() {
        let note = Note::new("alice", "x", vec!["Gift".to_string()]);
        assert!(note.has_tag("Gift"));
        assert!(!note.has_tag("gift"));
    }

    #[test]
    fn test_note_deserialization_defaults_tags() {
        let note: Note = serde_json::from_str(r#"{"text":"hi","author":"alice"}"#).unwrap();
        assert!(note.tags.is_empty());
    }
}
