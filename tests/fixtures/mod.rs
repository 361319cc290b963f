//! Test fixtures and sample data.
//!
//! Reusable builders for contacts and address books.

#![allow(dead_code)]

use chrono::NaiveDate;
use contact_organizer::{AddressBook, Contact};

/// Shorthand for a calendar date.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A contact with only a name.
pub fn sample_contact(name: &str) -> Contact {
    Contact::new(name).unwrap()
}

/// A contact with a name and a `YYYY-MM-DD` birthday.
pub fn contact_born(name: &str, birthday: &str) -> Contact {
    let mut contact = sample_contact(name);
    contact.set_birthday(birthday).unwrap();
    contact
}

/// A contact with every field set.
pub fn full_contact(
    name: &str,
    phone: &str,
    email: &str,
    birthday: &str,
    address: &str,
) -> Contact {
    let mut contact = sample_contact(name);
    contact.add_phone(phone).unwrap();
    contact.add_email(email).unwrap();
    contact.set_birthday(birthday).unwrap();
    contact.set_address(address);
    contact
}

/// A book holding `count` contacts named `contact00`, `contact01`, ...
pub fn numbered_book(count: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..count {
        book.insert(sample_contact(&format!("contact{:02}", i)));
    }
    book
}

/// Names of the given contacts, in order.
pub fn names<'a>(contacts: impl IntoIterator<Item = &'a Contact>) -> Vec<&'a str> {
    contacts.into_iter().map(|c| c.name().as_str()).collect()
}
