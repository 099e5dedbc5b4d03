//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Display and parse format for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2})\.(\d{2})\.(\d{4})$").expect("birthday pattern is valid")
});

/// Parse a `DD.MM.YYYY` string into a [`Birthday`].
pub fn parse_birthday(raw: &str) -> Result<Birthday, ValidationError> {
    Birthday::parse(raw)
}

/// A contact's date of birth.
///
/// Keeps the string exactly as entered for display, alongside the parsed
/// calendar date used by the birthday scheduler.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
/// use chrono::Datelike;
///
/// let birthday = Birthday::parse("23.07.1989").unwrap();
/// assert_eq!(birthday.date().month(), 7);
/// assert_eq!(birthday.to_string(), "23.07.1989");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Parse a birthday from the fixed `DD.MM.YYYY` format.
    ///
    /// Day and month must be zero-padded to two digits and the year must have
    /// four. The combination must be a real calendar date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` for any other shape, for
    /// non-numeric fields and for impossible dates such as `31.04.2000`.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        let invalid = || ValidationError::InvalidBirthday(raw.to_string());

        let caps = BIRTHDAY_SHAPE.captures(raw).ok_or_else(invalid)?;
        let day: u32 = caps[1].parse().map_err(|_| invalid())?;
        let month: u32 = caps[2].parse().map_err(|_| invalid())?;
        let year: i32 = caps[3].parse().map_err(|_| invalid())?;

        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;

        Ok(Self {
            raw: raw.to_string(),
            date,
        })
    }

    /// The parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The birthday as originally entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Re-date this birthday's month and day onto `year`.
    ///
    /// 29 February lands on 28 February in years without a leap day.
    pub fn project_onto(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day() - 1))
            .unwrap_or(self.date)
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Serde support - serialize as the entered string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
