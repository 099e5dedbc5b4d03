//! Contact record: one entry of the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact with zero or more phone numbers and an optional birthday.
///
/// Phones keep insertion order and may repeat. Every phone lookup compares
/// normalized digits, so `"050-123-45-67"` finds `"0501234567"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRecord {
    /// Name of the contact, unique within an address book
    pub name: ContactName,

    /// Phone numbers in the order they were added
    #[serde(default)]
    pub phones: Vec<PhoneNumber>,

    /// Date of birth, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a record from a raw name.
    pub fn named(name: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(ContactName::new(name)?))
    }

    /// Validate `raw` and append it to the phone list.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the first phone matching `old_raw` with `new_raw`.
    ///
    /// `new_raw` is validated before searching, so an invalid replacement
    /// fails even when `old_raw` is absent. Returns `Ok(false)` and leaves
    /// the record untouched when nothing matches.
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> Result<bool, ValidationError> {
        let replacement = PhoneNumber::new(new_raw)?;

        match self.phones.iter_mut().find(|p| p.matches(old_raw)) {
            Some(slot) => {
                *slot = replacement;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// First phone matching `raw` by normalized value.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.matches(raw))
    }

    /// Remove the first phone matching `raw`. Returns whether one was removed.
    pub fn remove_phone(&mut self, raw: &str) -> bool {
        match self.phones.iter().position(|p| p.matches(raw)) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Parse `raw` and set it as the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    /// Phones joined with `"; "`. Empty when the record has no phones.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: ",
            self.name,
            self.phones_display()
        )?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "None"),
        }
    }
}
