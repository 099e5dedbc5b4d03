//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The phone number does not reduce to exactly ten digits.
    InvalidPhone {
        /// Raw input as supplied by the caller
        input: String,
        /// Number of digits left after normalization
        digits: usize,
    },

    /// The birthday is not a valid `DD.MM.YYYY` calendar date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone { input, digits } => write!(
                f,
                "Phone must contain 10 digits, but {} has {}",
                input, digits
            ),
            Self::InvalidBirthday(value) => {
                write!(f, "Invalid date format. Use DD.MM.YYYY, got: {}", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
