use crate::error::{CommandError, CommandResult};
use std::str::FromStr;

/// Command reference shown by `help`.
pub const HELP_TEXT: &str = "\
All commands:
    add-contact <name>                  - add a contact
    add-phone <name> <phone>            - add a 10-digit phone to a contact
    edit-phone <name> <old> <new>       - replace one of a contact's phones
    set-email <name> <email>            - set a contact's email
    edit-email <name> <email>           - change a contact's existing email
    set-birthday <name> <YYYY-MM-DD>    - set a contact's birthday
    set-address <name> <address...>     - set a contact's address
    show <name>                         - show one contact
    delete-contact <name>               - delete a contact
    all-contacts                        - list every contact, page by page
    search <query>                      - search by name, or by phone if <query>
                                          starts with a digit
    upcoming-birthdays <days>           - contacts with a birthday in the next <days> days
    add-note <author> <text...> [#tag]  - add a note; words starting with # are tags
    edit-note <index> <text...> [#tag]  - replace a note's text and tags
    delete-note <index>                 - delete a note
    notes [#tag]                        - list notes, optionally only those with a tag
    rename-author <old> <new>           - change the author on every note by <old>
    exit                                - save and leave";

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    AddContact { name: String },
    AddPhone { name: String, phone: String },
    EditPhone { name: String, old: String, new: String },
    SetEmail { name: String, email: String },
    EditEmail { name: String, email: String },
    SetBirthday { name: String, date: String },
    SetAddress { name: String, address: String },
    Show { name: String },
    DeleteContact { name: String },
    AllContacts,
    Search { query: String },
    UpcomingBirthdays { days: i64 },
    AddNote { author: String, text: String, tags: Vec<String> },
    EditNote { index: usize, text: String, tags: Vec<String> },
    DeleteNote { index: usize },
    Notes { tag: Option<String> },
    RenameAuthor { old: String, new: String },
    Exit,
}

impl Command {
    /// Whether running the command can change the book.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::AddContact { .. }
                | Self::AddPhone { .. }
                | Self::EditPhone { .. }
                | Self::SetEmail { .. }
                | Self::EditEmail { .. }
                | Self::SetBirthday { .. }
                | Self::SetAddress { .. }
                | Self::DeleteContact { .. }
                | Self::AddNote { .. }
                | Self::EditNote { .. }
                | Self::DeleteNote { .. }
                | Self::RenameAuthor { .. }
        )
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> CommandResult<Self> {
        let mut words = line.split_whitespace();
        let Some(keyword) = words.next() else {
            return Err(CommandError::Empty);
        };
        let args: Vec<&str> = words.collect();

        let command = match keyword.to_ascii_lowercase().as_str() {
            "help" => Self::Help,
            "exit" | "quit" => Self::Exit,
            "add-contact" => match args.as_slice() {
                [name] => Self::AddContact { name: name.to_string() },
                _ => return Err(CommandError::Usage("add-contact <name>")),
            },
            "add-phone" => match args.as_slice() {
                [name, phone] => Self::AddPhone {
                    name: name.to_string(),
                    phone: phone.to_string(),
                },
                _ => return Err(CommandError::Usage("add-phone <name> <phone>")),
            },
            "edit-phone" => match args.as_slice() {
                [name, old, new] => Self::EditPhone {
                    name: name.to_string(),
                    old: old.to_string(),
                    new: new.to_string(),
                },
                _ => return Err(CommandError::Usage("edit-phone <name> <old> <new>")),
            },
            "set-email" => match args.as_slice() {
                [name, email] => Self::SetEmail {
                    name: name.to_string(),
                    email: email.to_string(),
                },
                _ => return Err(CommandError::Usage("set-email <name> <email>")),
            },
            "edit-email" => match args.as_slice() {
                [name, email] => Self::EditEmail {
                    name: name.to_string(),
                    email: email.to_string(),
                },
                _ => return Err(CommandError::Usage("edit-email <name> <email>")),
            },
            "set-birthday" => match args.as_slice() {
                [name, date] => Self::SetBirthday {
                    name: name.to_string(),
                    date: date.to_string(),
                },
                _ => return Err(CommandError::Usage("set-birthday <name> <YYYY-MM-DD>")),
            },
            "set-address" => match args.as_slice() {
                [name, rest @ ..] if !rest.is_empty() => Self::SetAddress {
                    name: name.to_string(),
                    address: rest.join(" "),
                },
                _ => return Err(CommandError::Usage("set-address <name> <address...>")),
            },
            "show" => match args.as_slice() {
                [name] => Self::Show { name: name.to_string() },
                _ => return Err(CommandError::Usage("show <name>")),
            },
            "delete-contact" => match args.as_slice() {
                [name] => Self::DeleteContact { name: name.to_string() },
                _ => return Err(CommandError::Usage("delete-contact <name>")),
            },
            "all-contacts" => Self::AllContacts,
            "search" => Self::Search { query: args.join(" ") },
            "upcoming-birthdays" => match args.as_slice() {
                [days] => Self::UpcomingBirthdays {
                    days: days
                        .parse()
                        .map_err(|_| CommandError::InvalidNumber(days.to_string()))?,
                },
                _ => return Err(CommandError::Usage("upcoming-birthdays <days>")),
            },
            "add-note" => match args.as_slice() {
                [author, rest @ ..] => {
                    let (text, tags) = split_tags(rest);
                    if text.is_empty() {
                        return Err(CommandError::Usage("add-note <author> <text...> [#tag]"));
                    }
                    Self::AddNote {
                        author: author.to_string(),
                        text,
                        tags,
                    }
                }
                _ => return Err(CommandError::Usage("add-note <author> <text...> [#tag]")),
            },
            "edit-note" => match args.as_slice() {
                [index, rest @ ..] => {
                    let (text, tags) = split_tags(rest);
                    if text.is_empty() {
                        return Err(CommandError::Usage("edit-note <index> <text...> [#tag]"));
                    }
                    Self::EditNote {
                        index: parse_index(index)?,
                        text,
                        tags,
                    }
                }
                _ => return Err(CommandError::Usage("edit-note <index> <text...> [#tag]")),
            },
            "delete-note" => match args.as_slice() {
                [index] => Self::DeleteNote {
                    index: parse_index(index)?,
                },
                _ => return Err(CommandError::Usage("delete-note <index>")),
            },
            "notes" => match args.as_slice() {
                [] => Self::Notes { tag: None },
                [tag] => Self::Notes {
                    tag: Some(tag.trim_start_matches('#').to_string()),
                },
                _ => return Err(CommandError::Usage("notes [#tag]")),
            },
            "rename-author" => match args.as_slice() {
                [old, new] => Self::RenameAuthor {
                    old: old.to_string(),
                    new: new.to_string(),
                },
                _ => return Err(CommandError::Usage("rename-author <old> <new>")),
            },
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

fn parse_index(raw: &str) -> CommandResult<usize> {
    raw.parse()
        .map_err(|_| CommandError::InvalidNumber(raw.to_string()))
}

/// Split note words into text and `#tags`.
fn split_tags(words: &[&str]) -> (String, Vec<String>) {
    let mut text = Vec::new();
    let mut tags = Vec::new();
    for word in words {
        match word.strip_prefix('#') {
            Some(tag) if !tag.is_empty() => tags.push(tag.to_string()),
            _ => text.push(*word),
        }
    }
    (text.join(" "), tags)
}
