use crate::error::{DirectoryError, DirectoryResult};
use crate::models::Contact;
use std::slice::Chunks;

/// Single-pass iterator over fixed-size batches of contacts.
///
/// Each call to `next` yields up to `page_size` contacts and advances. Once
/// exhausted it stays exhausted; ask the book for a new `Pages` to start
/// over.
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    chunks: Chunks<'a, Contact>,
}

impl<'a> Pages<'a> {
    pub(crate) fn new(contacts: &'a [Contact], page_size: usize) -> DirectoryResult<Self> {
        if page_size == 0 {
            return Err(DirectoryError::InvalidPageSize);
        }
        Ok(Self {
            chunks: contacts.chunks(page_size),
        })
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = &'a [Contact];

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Pages<'_> {}

impl std::iter::FusedIterator for Pages<'_> {}

/// Position in a paged listing, held by the caller between requests.
///
/// Unlike [`Pages`], a cursor borrows nothing, so it can be kept across
/// mutations of the book. Pages are computed against the book's contents at
/// the time of each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page: usize,
    page_size: usize,
}

impl PageCursor {
    /// A cursor at the first page.
    pub fn new(page_size: usize) -> DirectoryResult<Self> {
        if page_size == 0 {
            return Err(DirectoryError::InvalidPageSize);
        }
        Ok(Self { page: 0, page_size })
    }

    /// Zero-based page index.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The cursor for the following page.
    pub fn next_page(self) -> Self {
        Self {
            page: self.page + 1,
            ..self
        }
    }

    /// Slice of `contacts` this cursor points at; empty past the end.
    pub(crate) fn slice<'a>(&self, contacts: &'a [Contact]) -> &'a [Contact] {
        let start = self.page.saturating_mul(self.page_size).min(contacts.len());
        let end = start.saturating_add(self.page_size).min(contacts.len());
        &contacts[start..end]
    }
}
