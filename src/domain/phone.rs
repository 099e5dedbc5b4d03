//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of digits a phone number must have after normalization.
pub const PHONE_DIGITS: usize = 10;

/// Strip every character that is not an ASCII digit.
///
/// Total and deterministic: `"+38 (050) 123-45-67"` becomes `"380501234567"`.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Normalize `raw` and validate it as a [`PhoneNumber`].
pub fn validate_phone(raw: &str) -> Result<PhoneNumber, ValidationError> {
    PhoneNumber::new(raw)
}

/// A type-safe wrapper for a normalized ten digit phone number.
///
/// Formatting characters are accepted on input and dropped, so equality
/// and lookup always compare the bare digits.
///
/// # Example
///
/// ```
/// use address_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("(050) 123-45-67").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber from any punctuated input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless exactly ten digits
    /// remain after normalization.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        let digits = normalize_phone(raw);

        if digits.len() != PHONE_DIGITS {
            return Err(ValidationError::InvalidPhone {
                input: raw.to_string(),
                digits: digits.len(),
            });
        }

        Ok(Self(digits))
    }

    /// Whether this number equals `raw` once `raw` is normalized.
    pub fn matches(&self, raw: &str) -> bool {
        self.0 == normalize_phone(raw)
    }

    /// Get the normalized digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for PhoneNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
