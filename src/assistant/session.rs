use super::command::{Command, HELP_TEXT};
use crate::directory::AddressBook;
use crate::error::{CommandError, CommandResult};
use crate::models::Contact;
use crate::repositories::SnapshotRepository;
use crate::scheduling::{days_until_birthday, BirthdayScheduler, Clock};
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::io::{BufRead, Write};
use tracing::debug;

/// Prompt printed before each command is read.
pub const PROMPT: &str = "Write a command (help - all commands): ";

/// Whether the session should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// An interactive session: the book, where it is saved, and today's date.
pub struct Session<R, C> {
    book: AddressBook,
    repo: R,
    scheduler: BirthdayScheduler<C>,
    page_size: usize,
}

impl<R: SnapshotRepository, C: Clock> Session<R, C> {
    pub fn new(book: AddressBook, repo: R, clock: C, page_size: usize) -> Self {
        Self {
            book,
            repo,
            scheduler: BirthdayScheduler::new(clock),
            page_size,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// Read commands from `input` until `exit` or end of input.
    pub fn run<I: BufRead, O: Write>(&mut self, input: I, mut out: O) -> Result<()> {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        for line in input.lines() {
            let line = line.context("Failed to read command")?;
            if self.execute_line(&line, &mut out)? == Flow::Exit {
                break;
            }
            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }

        self.repo.save(&self.book)?;
        Ok(())
    }

    /// Parse and run one input line, reporting the outcome to `out`.
    ///
    /// User mistakes are printed and swallowed; only output and storage
    /// failures are returned.
    pub fn execute_line<O: Write>(&mut self, line: &str, out: &mut O) -> Result<Flow> {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => return Ok(Flow::Continue),
            Err(e) => {
                debug!(error = %e, "Rejected command");
                writeln!(out, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };
        self.execute(command, out)
    }

    /// Run a parsed command, saving the book if it may have changed.
    pub fn execute<O: Write>(&mut self, command: Command, out: &mut O) -> Result<Flow> {
        debug!(?command, "Executing command");

        if command == Command::Exit {
            return Ok(Flow::Exit);
        }

        let mutating = command.is_mutating();
        match self.apply(command) {
            Ok(reply) => write!(out, "{}", reply)?,
            Err(e) => {
                debug!(error = %e, "Command failed");
                writeln!(out, "{}", e)?;
                return Ok(Flow::Continue);
            }
        }

        if mutating {
            self.repo
                .save(&self.book)
                .context("Failed to save address book")?;
        }
        Ok(Flow::Continue)
    }

    fn apply(&mut self, command: Command) -> CommandResult<String> {
        let mut reply = String::new();

        match command {
            Command::Help => line(&mut reply, HELP_TEXT),
            Command::Exit => {}
            Command::AddContact { name } => {
                let replaced = self.book.contains(&name);
                self.book.add_contact(&name)?;
                if replaced {
                    line(&mut reply, format!("Contact {} replaced", name));
                } else {
                    line(&mut reply, format!("Contact {} added", name));
                }
            }
            Command::AddPhone { name, phone } => {
                self.contact_mut(&name)?.add_phone(&phone)?;
                line(&mut reply, "Phone added");
            }
            Command::EditPhone { name, old, new } => {
                self.contact_mut(&name)?.edit_phone(&old, &new)?;
                line(&mut reply, "Phone changed");
            }
            Command::SetEmail { name, email } => {
                self.contact_mut(&name)?.add_email(&email)?;
                line(&mut reply, "Email set");
            }
            Command::EditEmail { name, email } => {
                self.contact_mut(&name)?.edit_email(&email)?;
                line(&mut reply, "Email changed");
            }
            Command::SetBirthday { name, date } => {
                self.contact_mut(&name)?.set_birthday(&date)?;
                line(&mut reply, "Birthday set");
            }
            Command::SetAddress { name, address } => {
                self.contact_mut(&name)?.set_address(&address);
                line(&mut reply, "Address set");
            }
            Command::Show { name } => {
                let contact = self
                    .book
                    .find(&name)
                    .ok_or(CommandError::ContactNotFound(name))?;
                line(&mut reply, contact);
            }
            Command::DeleteContact { name } => {
                if self.book.delete(&name).is_some() {
                    line(&mut reply, "Contact deleted");
                } else {
                    return Err(CommandError::ContactNotFound(name));
                }
            }
            Command::AllContacts => {
                if self.book.is_empty() {
                    line(&mut reply, "The address book is empty.");
                }
                for (number, page) in self.book.paginate(self.page_size)?.enumerate() {
                    line(&mut reply, format!("-- page {} --", number + 1));
                    for contact in page {
                        line(&mut reply, contact);
                    }
                }
            }
            Command::Search { query } => {
                let found = self.book.search(&query);
                if found.is_empty() {
                    line(&mut reply, "Nothing found.");
                }
                for contact in found {
                    line(&mut reply, contact);
                }
            }
            Command::UpcomingBirthdays { days } => {
                let today = self.scheduler.today();
                let upcoming = self.scheduler.upcoming(self.book.iter(), days)?;
                if upcoming.is_empty() {
                    line(
                        &mut reply,
                        format!("No upcoming birthdays within the next {} days.", days),
                    );
                } else {
                    line(
                        &mut reply,
                        format!("Upcoming birthdays within the next {} days:", days),
                    );
                }
                for contact in upcoming {
                    line(&mut reply, birthday_line(contact, today));
                }
            }
            Command::AddNote { author, text, tags } => {
                self.book.notes_mut().add(author, text, tags);
                line(&mut reply, "Note added");
            }
            Command::EditNote { index, text, tags } => {
                self.book.notes_mut().edit(index, text, tags)?;
                line(&mut reply, format!("Note {} edited", index));
            }
            Command::DeleteNote { index } => {
                let note = self.book.notes_mut().delete(index)?;
                line(&mut reply, format!("Note {} deleted: {}", index, note));
            }
            Command::Notes { tag } => {
                let listed: Vec<_> = self
                    .book
                    .notes()
                    .iter()
                    .enumerate()
                    .filter(|(_, note)| tag.as_deref().map_or(true, |t| note.has_tag(t)))
                    .collect();
                if listed.is_empty() {
                    line(&mut reply, "No notes available.");
                }
                for (i, note) in listed {
                    line(&mut reply, format!("{}. {}", i + 1, note));
                }
            }
            Command::RenameAuthor { old, new } => {
                let renamed = self.book.notes_mut().rename_author(&old, &new);
                line(&mut reply, format!("{} notes updated", renamed));
            }
        }

        Ok(reply)
    }

    fn contact_mut(&mut self, name: &str) -> CommandResult<&mut Contact> {
        self.book
            .find_mut(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
    }
}

fn line(reply: &mut String, text: impl std::fmt::Display) {
    // Writing to a String cannot fail
    let _ = writeln!(reply, "{}", text);
}

fn birthday_line(contact: &Contact, today: chrono::NaiveDate) -> String {
    match contact
        .birthday()
        .and_then(|birthday| days_until_birthday(birthday, today))
    {
        Some(0) => format!("{} (today)", contact),
        Some(days) => format!("{} (in {} days)", contact, days),
        None => contact.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageResult;
    use crate::scheduling::FixedClock;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    /// Counts saves instead of touching the filesystem.
    #[derive(Default)]
    struct CountingRepository {
        saves: Mutex<usize>,
    }

    impl SnapshotRepository for CountingRepository {
        fn load(&self) -> StorageResult<Option<AddressBook>> {
            Ok(None)
        }

        fn save(&self, _book: &AddressBook) -> StorageResult<()> {
            *self.saves.lock().unwrap() += 1;
            Ok(())
        }
    }

    fn session() -> Session<CountingRepository, FixedClock> {
        let today = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        Session::new(
            AddressBook::new(),
            CountingRepository::default(),
            FixedClock(today),
            2,
        )
    }

    fn run(session: &mut Session<CountingRepository, FixedClock>, line: &str) -> String {
        let mut out = Vec::new();
        session.execute_line(line, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_add_contact_and_phone() {
        let mut session = session();
        assert_eq!(run(&mut session, "add-contact Alice"), "Contact Alice added\n");
        assert_eq!(run(&mut session, "add-phone Alice 0501234567"), "Phone added\n");

        let alice = session.book().find("Alice").unwrap();
        assert_eq!(alice.phones()[0].as_str(), "0501234567");
        assert_eq!(*session.repo.saves.lock().unwrap(), 2);
    }

    #[test]
    fn test_errors_are_reported_not_returned() {
        let mut session = session();
        assert_eq!(run(&mut session, "add-phone Bob 0501234567"), "Contact Bob not found\n");

        run(&mut session, "add-contact Bob");
        assert_eq!(
            run(&mut session, "add-phone Bob 123"),
            "Invalid phone format: 123\n"
        );
        assert_eq!(
            run(&mut session, "edit-email Bob bob@example.com"),
            "Contact has no email to edit\n"
        );
        // Only the successful add-contact was saved
        assert_eq!(*session.repo.saves.lock().unwrap(), 1);
    }

    #[test]
    fn test_all_contacts_pages() {
        let mut session = session();
        for name in ["a", "b", "c"] {
            run(&mut session, &format!("add-contact {}", name));
        }

        let output = run(&mut session, "all-contacts");
        assert_eq!(
            output,
            "-- page 1 --\nContact name: a\nContact name: b\n-- page 2 --\nContact name: c\n"
        );
    }

    #[test]
    fn test_upcoming_birthdays_rolls_into_next_year() {
        let mut session = session();
        run(&mut session, "add-contact Newt");
        run(&mut session, "set-birthday Newt 1990-01-02");

        let output = run(&mut session, "upcoming-birthdays 5");
        assert!(output.contains("Contact name: Newt, birthday: 1990-01-02 (in 3 days)"));

        let output = run(&mut session, "upcoming-birthdays 2");
        assert_eq!(output, "No upcoming birthdays within the next 2 days.\n");

        let output = run(&mut session, "upcoming-birthdays -1");
        assert_eq!(output, "Number of days must be non-negative, got -1\n");
    }

    #[test]
    fn test_notes_flow() {
        let mut session = session();
        run(&mut session, "add-note alice buy a sled #gift");
        run(&mut session, "add-note bob call mum");

        assert_eq!(
            run(&mut session, "notes #gift"),
            "1. buy a sled (by alice, Tags: gift)\n"
        );
        assert_eq!(run(&mut session, "rename-author alice carol"), "1 notes updated\n");
        assert_eq!(
            run(&mut session, "delete-note 1"),
            "Note 1 deleted: buy a sled (by carol, Tags: gift)\n"
        );
        assert_eq!(
            run(&mut session, "delete-note 5"),
            "Note index 5 out of range (store has 1 notes)\n"
        );
    }

    #[test]
    fn test_notes_filter_without_matches() {
        let mut session = session();
        assert_eq!(run(&mut session, "notes"), "No notes available.\n");

        run(&mut session, "add-note alice buy a sled #gift");
        assert_eq!(run(&mut session, "notes #work"), "No notes available.\n");
    }

    #[test]
    fn test_edit_note_requires_text() {
        let mut session = session();
        run(&mut session, "add-note alice buy a sled #gift");

        assert_eq!(
            run(&mut session, "edit-note 1 #winter"),
            "Usage: edit-note <index> <text...> [#tag]\n"
        );
        assert_eq!(
            run(&mut session, "notes"),
            "1. buy a sled (by alice, Tags: gift)\n"
        );
        assert_eq!(*session.repo.saves.lock().unwrap(), 1);
    }

    #[test]
    fn test_run_reads_until_exit_and_saves() {
        let mut session = session();
        let input = "add-contact Alice\nbogus\nexit\nadd-contact Never\n";
        let mut out = Vec::new();
        session.run(input.as_bytes(), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with(PROMPT));
        assert!(output.contains("The command \"bogus\" was not found"));
        assert!(session.book().contains("Alice"));
        assert!(!session.book().contains("Never"));
        // One save for add-contact, one on the way out
        assert_eq!(*session.repo.saves.lock().unwrap(), 2);
    }
}
