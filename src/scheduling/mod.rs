//! Birthday scheduling.
//!
//! Works out which contacts have a birthday coming up within a window of
//! days. "Today" comes from a [`Clock`] so callers and tests can pin it.

mod clock;
mod upcoming;

pub use clock::{Clock, FixedClock, SystemClock};
pub use upcoming::{days_until_birthday, next_birthday, upcoming_birthdays, BirthdayScheduler};
