use crate::error::{NoteError, NoteResult};
use crate::models::Note;
use serde::{Deserialize, Serialize};

/// Ordered collection of notes addressed by 1-based position.
///
/// Positions shift down when an earlier note is deleted, matching what the
/// user sees in a freshly printed listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a note.
    pub fn add(&mut self, author: impl Into<String>, text: impl Into<String>, tags: Vec<String>) {
        self.notes.push(Note::new(author, text, tags));
    }

    /// Append a note with no tags.
    pub fn add_untagged(&mut self, author: impl Into<String>, text: impl Into<String>) {
        self.add(author, text, Vec::new());
    }

    /// Replace the text and tags of the note at 1-based `index`.
    pub fn edit(
        &mut self,
        index: usize,
        text: impl Into<String>,
        tags: Vec<String>,
    ) -> NoteResult<()> {
        let slot = self.position(index)?;
        let note = &mut self.notes[slot];
        note.text = text.into();
        note.tags = tags;
        Ok(())
    }

    /// Remove and return the note at 1-based `index`.
    pub fn delete(&mut self, index: usize) -> NoteResult<Note> {
        let slot = self.position(index)?;
        Ok(self.notes.remove(slot))
    }

    /// Rewrite the author on every note written by `old_author`.
    ///
    /// Matching is exact and case-sensitive. Returns how many notes changed.
    pub fn rename_author(&mut self, old_author: &str, new_author: &str) -> usize {
        let mut renamed = 0;
        for note in self.notes.iter_mut().filter(|n| n.author == old_author) {
            note.author = new_author.to_string();
            renamed += 1;
        }
        renamed
    }

    /// Notes carrying `tag`, in store order.
    pub fn with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Note> + 'a {
        self.notes.iter().filter(move |note| note.has_tag(tag))
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.position(index).ok().map(|slot| &self.notes[slot])
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn position(&self, index: usize) -> NoteResult<usize> {
        if index == 0 || index > self.notes.len() {
            return Err(NoteError::IndexOutOfRange {
                index,
                len: self.notes.len(),
            });
        }
        Ok(index - 1)
    }
}

impl<'a> IntoIterator for &'a NoteStore {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}
