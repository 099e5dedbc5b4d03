//! Upcoming birthday scheduling.
//!
//! Finds the contacts whose birthday falls within the next week and moves
//! weekend birthdays to the following Monday so greetings land on a working
//! day.
//!
//! Two policies are available:
//!
//! - [`BirthdayPolicy::Legacy`] keeps the historical behaviour of the address
//!   book: only birthdays later in the current month are considered, the
//!   window is a day-of-month difference, and the report is split into two
//!   sections by the order contacts are found in rather than by date.
//! - [`BirthdayPolicy::Calendar`] measures real day distances, wraps around
//!   month and year ends, sorts by greeting date, and buckets by ISO week.

use crate::domain::{ContactName, BIRTHDAY_FORMAT};
use crate::models::ContactRecord;
use chrono::{Datelike, Days, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Reply when nobody has a birthday in the window.
pub const NO_BIRTHDAYS_MESSAGE: &str = "No birthdays in the next week.";

/// Section header of the legacy report.
pub const LEGACY_NEXT_WEEK_HEADER: &str = "Birthdays to celebrate next week:";

/// Largest day distance from today still inside the window.
const WINDOW_DAYS: i64 = 6;

/// Which upcoming birthday algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BirthdayPolicy {
    /// Same-month filter with encounter-order sections
    #[default]
    Legacy,
    /// Real day distance with date-ordered sections
    Calendar,
}

impl FromStr for BirthdayPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legacy" => Ok(BirthdayPolicy::Legacy),
            "calendar" => Ok(BirthdayPolicy::Calendar),
            other => Err(format!("expected 'legacy' or 'calendar', got: {}", other)),
        }
    }
}

/// One contact to greet and the day to do it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: ContactName,
    /// Birthday in the current cycle, moved off the weekend
    pub greeting_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.name,
            self.greeting_date.format(BIRTHDAY_FORMAT)
        )
    }
}

/// Birthdays within the next week, split into two sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayReport {
    pub policy: BirthdayPolicy,
    pub this_week: Vec<UpcomingBirthday>,
    pub next_week: Vec<UpcomingBirthday>,
}

impl BirthdayReport {
    pub fn is_empty(&self) -> bool {
        self.this_week.is_empty() && self.next_week.is_empty()
    }

    /// Every entry, this week first.
    pub fn entries(&self) -> impl Iterator<Item = &UpcomingBirthday> {
        self.this_week.iter().chain(self.next_week.iter())
    }
}

impl fmt::Display for BirthdayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{}", NO_BIRTHDAYS_MESSAGE);
        }

        match self.policy {
            BirthdayPolicy::Legacy => {
                // The header goes in front of the whole list once a second
                // entry exists, the first entry included.
                if !self.next_week.is_empty() {
                    write!(f, "\n{}\n", LEGACY_NEXT_WEEK_HEADER)?;
                }
                for entry in self.entries() {
                    writeln!(f, "{}", entry)?;
                }
                Ok(())
            }
            BirthdayPolicy::Calendar => {
                let sections = [("This week:", &self.this_week), ("Next week:", &self.next_week)];
                let mut first = true;
                for (title, entries) in sections {
                    if entries.is_empty() {
                        continue;
                    }
                    if !first {
                        writeln!(f)?;
                    }
                    first = false;
                    writeln!(f, "{}", title)?;
                    for entry in entries.iter() {
                        writeln!(f, "{}", entry)?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// Move a Saturday or Sunday to the following Monday.
pub fn shift_weekend(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().num_days_from_monday();
    if weekday >= 5 {
        date.checked_add_days(Days::new(u64::from(7 - weekday)))
            .unwrap_or(date)
    } else {
        date
    }
}

/// Build the upcoming birthday report for `today` under `policy`.
///
/// `records` is scanned in order; the legacy policy depends on that order.
pub fn upcoming<'a, I>(today: NaiveDate, records: I, policy: BirthdayPolicy) -> BirthdayReport
where
    I: IntoIterator<Item = &'a ContactRecord>,
{
    match policy {
        BirthdayPolicy::Legacy => upcoming_legacy(today, records),
        BirthdayPolicy::Calendar => upcoming_calendar(today, records),
    }
}

fn upcoming_legacy<'a, I>(today: NaiveDate, records: I) -> BirthdayReport
where
    I: IntoIterator<Item = &'a ContactRecord>,
{
    let mut kept = Vec::new();

    for record in records {
        let Some(birthday) = &record.birthday else {
            continue;
        };

        let projected = birthday.project_onto(today.year());
        if projected.month() != today.month() || projected.day() < today.day() {
            continue;
        }

        let greeting_date = shift_weekend(projected);
        if i64::from(greeting_date.day()) - i64::from(today.day()) > WINDOW_DAYS {
            continue;
        }

        kept.push(UpcomingBirthday {
            name: record.name.clone(),
            greeting_date,
        });
    }

    let next_week = if kept.len() > 1 { kept.split_off(1) } else { Vec::new() };

    BirthdayReport {
        policy: BirthdayPolicy::Legacy,
        this_week: kept,
        next_week,
    }
}

fn upcoming_calendar<'a, I>(today: NaiveDate, records: I) -> BirthdayReport
where
    I: IntoIterator<Item = &'a ContactRecord>,
{
    let mut kept: Vec<UpcomingBirthday> = records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday.as_ref()?;

            let mut occurrence = birthday.project_onto(today.year());
            if occurrence < today {
                occurrence = birthday.project_onto(today.year() + 1);
            }
            if (occurrence - today).num_days() > WINDOW_DAYS {
                return None;
            }

            Some(UpcomingBirthday {
                name: record.name.clone(),
                greeting_date: shift_weekend(occurrence),
            })
        })
        .collect();

    kept.sort_by(|a, b| {
        a.greeting_date
            .cmp(&b.greeting_date)
            .then_with(|| a.name.cmp(&b.name))
    });

    let current_week = today.iso_week();
    let (this_week, next_week): (Vec<_>, Vec<_>) = kept
        .into_iter()
        .partition(|entry| entry.greeting_date.iso_week() == current_week);

    BirthdayReport {
        policy: BirthdayPolicy::Calendar,
        this_week,
        next_week,
    }
}
