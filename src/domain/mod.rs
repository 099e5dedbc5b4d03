//! Domain value objects and field validators.
//!
//! This module contains type-safe wrappers for contact names, phone numbers
//! and birthdays. These value objects validate at construction time so an
//! invalid field can never be stored in a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{parse_birthday, Birthday, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::{normalize_phone, validate_phone, PhoneNumber, PHONE_DIGITS};
