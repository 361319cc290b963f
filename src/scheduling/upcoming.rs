use super::clock::Clock;
use crate::domain::Birthday;
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::Contact;
use chrono::{Datelike, NaiveDate};

/// The birthday's anniversary in `year`.
///
/// February 29 falls on March 1 in years without a leap day.
fn anniversary(birthday: Birthday, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// The first anniversary of `birthday` on or after `today`.
///
/// Returns `None` only when the date would fall outside the representable
/// calendar range.
pub fn next_birthday(birthday: Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary(birthday, today.year())?;
    if this_year >= today {
        Some(this_year)
    } else {
        anniversary(birthday, today.year() + 1)
    }
}

/// Whole days from `today` until the next anniversary of `birthday`.
pub fn days_until_birthday(birthday: Birthday, today: NaiveDate) -> Option<i64> {
    next_birthday(birthday, today).map(|next| (next - today).num_days())
}

/// Contacts whose next birthday falls within `[today, today + days_count]`.
///
/// Results keep the order of `contacts`. Contacts without a birthday are
/// skipped.
///
/// # Errors
///
/// Returns `ScheduleError::NegativeDays` if `days_count` is negative.
pub fn upcoming_birthdays<'a, I>(
    contacts: I,
    today: NaiveDate,
    days_count: i64,
) -> ScheduleResult<Vec<&'a Contact>>
where
    I: IntoIterator<Item = &'a Contact>,
{
    if days_count < 0 {
        return Err(ScheduleError::NegativeDays(days_count));
    }

    Ok(contacts
        .into_iter()
        .filter(|contact| {
            contact
                .birthday()
                .and_then(|birthday| days_until_birthday(birthday, today))
                .is_some_and(|delta| (0..=days_count).contains(&delta))
        })
        .collect())
}

/// Upcoming-birthday queries against an injected clock.
#[derive(Debug, Clone)]
pub struct BirthdayScheduler<C> {
    clock: C,
}

impl<C: Clock> BirthdayScheduler<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// See [`upcoming_birthdays`].
    pub fn upcoming<'a, I>(&self, contacts: I, days_count: i64) -> ScheduleResult<Vec<&'a Contact>>
    where
        I: IntoIterator<Item = &'a Contact>,
    {
        upcoming_birthdays(contacts, self.clock.today(), days_count)
    }
}
