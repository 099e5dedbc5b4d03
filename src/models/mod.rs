//! Data models for the address book.
//!
//! This module contains the contact record and the address book that owns
//! every record for the lifetime of a session.

pub mod book;
pub mod record;

pub use book::{AddOutcome, AddressBook};
pub use record::ContactRecord;
