//! Tests for the address book: keyed storage, search and pagination.

mod fixtures;

use contact_organizer::{AddressBook, DirectoryError, PageCursor};
use fixtures::*;

#[test]
fn test_paginate_twelve_by_five() {
    let book = numbered_book(12);

    let mut pages = book.paginate(5).unwrap();
    assert_eq!(pages.next().map(|p| p.len()), Some(5));
    assert_eq!(pages.next().map(|p| p.len()), Some(5));
    let last = pages.next().unwrap();
    assert_eq!(names(last), vec!["contact10", "contact11"]);
    assert!(pages.next().is_none());
    assert!(pages.next().is_none());

    // A fresh iterator starts from the first page again
    let first = book.paginate(5).unwrap().next().unwrap();
    assert_eq!(first[0].name().as_str(), "contact00");
}

#[test]
fn test_paginate_follows_insertion_order() {
    let book = numbered_book(7);
    let seen: Vec<&str> = book
        .paginate(3)
        .unwrap()
        .flat_map(|page| page.iter().map(|c| c.name().as_str()))
        .collect();
    assert_eq!(seen, book.names().collect::<Vec<_>>());
}

#[test]
fn test_paginate_empty_book() {
    let book = AddressBook::new();
    assert_eq!(book.paginate(5).unwrap().count(), 0);
}

#[test]
fn test_paginate_zero_page_size() {
    let book = numbered_book(3);
    assert!(matches!(book.paginate(0), Err(DirectoryError::InvalidPageSize)));
}

#[test]
fn test_cursor_survives_mutation() {
    let mut book = numbered_book(6);
    let cursor = PageCursor::new(4).unwrap().next_page();
    assert_eq!(book.page(cursor).len(), 2);

    book.delete("contact00");
    assert_eq!(names(book.page(cursor)), vec!["contact05"]);
}

#[test]
fn test_delete_absent_leaves_book_unchanged() {
    let mut book = numbered_book(2);
    let before = book.clone();

    assert!(book.delete("x").is_none());
    assert_eq!(book, before);
}

#[test]
fn test_duplicate_insert_keeps_latest() {
    let mut book = AddressBook::new();
    let r1 = contact_born("a", "1990-01-01");
    let r2 = contact_born("a", "1991-02-02");

    book.insert(r1);
    book.insert(r2.clone());

    assert_eq!(book.len(), 1);
    assert_eq!(book.find("a"), Some(&r2));
}

#[test]
fn test_search_modes() {
    let mut book = AddressBook::new();
    book.insert(full_contact("Alice", "0501234567", "alice@example.com", "1990-01-01", "Kyiv"));
    book.insert(full_contact("Bob", "0671234567", "bob@example.com", "1991-01-01", "Lviv"));
    book.insert(sample_contact("Albert"));

    assert_eq!(names(book.search("al")), vec!["Alice", "Albert"]);
    assert_eq!(names(book.search("1234567")), vec!["Alice", "Bob"]);
    assert_eq!(names(book.search("067")), vec!["Bob"]);
    // Phone mode never looks at names, name mode never looks at phones
    assert!(book.search("0Alice").is_empty());
    assert!(book.search("x050").is_empty());
}

#[test]
fn test_find_mut_edits_in_place() {
    let mut book = numbered_book(1);
    book.find_mut("contact00")
        .unwrap()
        .add_email("someone@example.com")
        .unwrap();

    assert_eq!(
        book.find("contact00").unwrap().email().unwrap().as_str(),
        "someone@example.com"
    );
}
