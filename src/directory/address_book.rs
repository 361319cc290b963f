use super::pages::{PageCursor, Pages};
use crate::domain::ValidationError;
use crate::error::DirectoryResult;
use crate::models::Contact;
use crate::notes::NoteStore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Contacts keyed by name, together with the book's notes.
///
/// Every contact is filed under its own name, so the key always equals the
/// contact's name. Inserting a contact whose name is already present
/// replaces the existing one in place rather than failing.
///
/// Contacts are stored in insertion order with a name index beside them, so
/// lookups and inserts are constant time. Deleting shifts the later contacts
/// and is linear in the size of the book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BookSnapshot")]
pub struct AddressBook {
    contacts: Vec<Contact>,
    #[serde(skip)]
    index: HashMap<String, usize>,
    notes: NoteStore,
}

/// Wire shape of a book. Converting re-applies key uniqueness.
#[derive(Deserialize)]
struct BookSnapshot {
    #[serde(default)]
    contacts: Vec<Contact>,
    #[serde(default)]
    notes: NoteStore,
}

impl From<BookSnapshot> for AddressBook {
    fn from(snapshot: BookSnapshot) -> Self {
        let mut book = AddressBook {
            contacts: Vec::with_capacity(snapshot.contacts.len()),
            index: HashMap::with_capacity(snapshot.contacts.len()),
            notes: snapshot.notes,
        };
        for contact in snapshot.contacts {
            book.insert(contact);
        }
        book
    }
}

impl AddressBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// File `contact` under its name.
    ///
    /// If a contact with the same name exists it is replaced, keeping its
    /// position, and the old contact is returned.
    pub fn insert(&mut self, contact: Contact) -> Option<Contact> {
        match self.position(contact.name().as_str()) {
            Some(index) => Some(std::mem::replace(&mut self.contacts[index], contact)),
            None => {
                self.push(contact);
                None
            }
        }
    }

    /// Create a contact named `name`, file it, and return it for editing.
    ///
    /// An existing contact with that name is replaced by the new, empty one.
    pub fn add_contact(&mut self, name: &str) -> Result<&mut Contact, ValidationError> {
        let contact = Contact::new(name)?;
        let index = match self.position(name) {
            Some(index) => {
                self.contacts[index] = contact;
                index
            }
            None => self.push(contact),
        };
        Ok(&mut self.contacts[index])
    }

    /// Exact-name lookup.
    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.position(name).map(|index| &self.contacts[index])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        let index = self.position(name)?;
        Some(&mut self.contacts[index])
    }

    /// Remove the contact named `name`. Absent names are a no-op.
    pub fn delete(&mut self, name: &str) -> Option<Contact> {
        let index = self.index.remove(name)?;
        let removed = self.contacts.remove(index);
        for contact in &self.contacts[index..] {
            if let Some(slot) = self.index.get_mut(contact.name().as_str()) {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Find contacts by name or phone.
    ///
    /// If the query starts with an ASCII digit (`0`-`9`) it is treated as a phone
    /// fragment and matched against every phone of every contact; otherwise
    /// it is matched against names. Only one mode runs per query. Matching is
    /// a case-insensitive substring test, and an empty query matches every
    /// name.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        let phone_mode = query.chars().next().is_some_and(|c| c.is_ascii_digit());

        if phone_mode {
            self.contacts
                .iter()
                .filter(|c| c.has_phone_containing(query))
                .collect()
        } else {
            let needle = query.to_lowercase();
            self.contacts
                .iter()
                .filter(|c| c.name().as_str().to_lowercase().contains(&needle))
                .collect()
        }
    }

    /// Walk the book in batches of `page_size`.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::InvalidPageSize` if `page_size` is zero.
    pub fn paginate(&self, page_size: usize) -> DirectoryResult<Pages<'_>> {
        Pages::new(&self.contacts, page_size)
    }

    /// The contacts on the page `cursor` points at.
    pub fn page(&self, cursor: PageCursor) -> &[Contact] {
        cursor.slice(&self.contacts)
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.contacts.iter().map(|c| c.name().as_str())
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn notes(&self) -> &NoteStore {
        &self.notes
    }

    pub fn notes_mut(&mut self) -> &mut NoteStore {
        &mut self.notes
    }

    /// Serialize the whole book (contacts and notes) as a JSON snapshot.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Rebuild a book from a snapshot produced by [`AddressBook::to_json`].
    ///
    /// Every field is validated again on the way in.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    fn push(&mut self, contact: Contact) -> usize {
        let index = self.contacts.len();
        self.index.insert(contact.name().as_str().to_string(), index);
        self.contacts.push(contact);
        index
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
