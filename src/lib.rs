//! Address Book - an interactive, in-memory contact directory.
//!
//! Stores names, phone numbers and birthdays, and reports which contacts
//! have a birthday within the next week, moving weekend birthdays to the
//! following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names, phones and birthdays
//! - **models**: Contact records and the address book that owns them
//! - **repositories**: Storage abstraction with an in-memory implementation
//! - **services**: Business operations and the birthday scheduler
//! - **commands**: Command dispatcher mapping user commands to replies
//! - **config**: Configuration from environment variables
//! - **error**: Error types for precise error handling

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod repositories;
pub mod services;

pub use commands::{CommandDispatcher, Reply};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, ConfigError};
pub use models::{AddOutcome, AddressBook, ContactRecord};
pub use repositories::{ContactRepository, MemoryContactRepository};
pub use services::{BirthdayPolicy, BirthdayReport, ContactService, ContactServiceImpl};
