//! Command dispatcher for the address book.
//!
//! Routes a command name and its arguments to the contact service and turns
//! every outcome, failures included, into the text shown to the user. This
//! is the single place where errors are recovered.

use super::command::{parse_input, Command};
use crate::domain::ValidationError;
use crate::error::BookError;
use crate::services::ContactChange;
use crate::services::ContactService;
use std::sync::Arc;
use thiserror::Error;

pub const GREETING_REPLY: &str = "How can I help you?";
pub const FAREWELL_REPLY: &str = "Good bye!";
pub const INVALID_COMMAND_REPLY: &str = "Invalid command.";
pub const CONTACT_ADDED_REPLY: &str = "Contact added.";
pub const CONTACT_UPDATED_REPLY: &str = "Contact updated.";
pub const CONTACT_REMOVED_REPLY: &str = "Contact removed.";
pub const CONTACT_NOT_FOUND_REPLY: &str = "Contact not found.";
pub const PHONE_NOT_FOUND_REPLY: &str = "Phone not found.";
pub const NO_CONTACTS_REPLY: &str = "No contacts saved.";
pub const GIVE_NAME_AND_PHONE_REPLY: &str = "Give me name and phone please.";
pub const ENTER_NAME_REPLY: &str = "Enter the contact name please.";
pub const CONTACT_EXISTS_REPLY: &str = "This contact is not exist :(";

/// Failures a command can end with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A command taking several arguments got too few
    #[error("Not enough arguments")]
    MissingArguments,

    /// A command taking only a name got none
    #[error("Contact name is required")]
    MissingName,

    /// An argument failed validation
    #[error("Invalid input: {0}")]
    Invalid(#[from] ValidationError),

    /// Creating a contact collided with an existing one
    #[error("Contact already exists: {0}")]
    ContactExists(String),

    /// The named contact is not in the book
    #[error("Contact not found: {0}")]
    NotFound(String),
}

impl CommandError {
    /// The fixed reply shown for this failure.
    pub fn reply(&self) -> &'static str {
        match self {
            Self::MissingArguments | Self::Invalid(_) => GIVE_NAME_AND_PHONE_REPLY,
            Self::MissingName => ENTER_NAME_REPLY,
            Self::ContactExists(_) => CONTACT_EXISTS_REPLY,
            Self::NotFound(_) => CONTACT_NOT_FOUND_REPLY,
        }
    }
}

impl From<BookError> for CommandError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::NotFound(name) => Self::NotFound(name),
            BookError::AlreadyExists(name) => Self::ContactExists(name),
            BookError::Validation(err) => Self::Invalid(err),
        }
    }
}

/// Text to show the user, and whether the session is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub exit: bool,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: false,
        }
    }

    pub fn exit(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: true,
        }
    }
}

/// Maps commands onto contact service operations.
#[derive(Clone)]
pub struct CommandDispatcher {
    contact_service: Arc<dyn ContactService>,
}

impl CommandDispatcher {
    pub fn new(contact_service: Arc<dyn ContactService>) -> Self {
        Self { contact_service }
    }

    /// Parse and run one input line. Blank lines yield `None`.
    pub async fn dispatch_line(&self, line: &str) -> Option<Reply> {
        let (command, args) = parse_input(line)?;
        Some(self.dispatch(&command, &args).await)
    }

    /// Run `command` with `args`. Never fails: errors become fixed replies.
    pub async fn dispatch(&self, command: &str, args: &[String]) -> Reply {
        let command = match command.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                tracing::debug!("{}", e);
                return Reply::text(INVALID_COMMAND_REPLY);
            }
        };

        tracing::debug!(?command, args = args.len(), "Dispatching command");

        match self.execute(command, args).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(?command, error = %e, "Command rejected");
                Reply::text(e.reply())
            }
        }
    }

    async fn execute(&self, command: Command, args: &[String]) -> Result<Reply, CommandError> {
        let service = &self.contact_service;

        let text = match command {
            Command::Hello => GREETING_REPLY.to_string(),
            Command::Exit => return Ok(Reply::exit(FAREWELL_REPLY)),
            Command::Add => {
                let [name, phone] = required::<2>(args)?;
                match service.add_contact(name, phone).await? {
                    ContactChange::Created => CONTACT_ADDED_REPLY.to_string(),
                    ContactChange::Updated => CONTACT_UPDATED_REPLY.to_string(),
                }
            }
            Command::Change => {
                let [name, old_phone, new_phone] = required::<3>(args)?;
                if service.change_phone(name, old_phone, new_phone).await? {
                    CONTACT_UPDATED_REPLY.to_string()
                } else {
                    PHONE_NOT_FOUND_REPLY.to_string()
                }
            }
            Command::Phone => {
                let record = service.get_contact(name_arg(args)?).await?;
                format!("{} - {}", record.name, record.phones_display())
            }
            Command::All => {
                let records = service.list_contacts().await?;
                if records.is_empty() {
                    NO_CONTACTS_REPLY.to_string()
                } else {
                    records
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            Command::AddBirthday => {
                let [name, birthday] = required::<2>(args)?;
                service.set_birthday(name, birthday).await?;
                CONTACT_UPDATED_REPLY.to_string()
            }
            Command::ShowBirthday => {
                let record = service.get_contact(name_arg(args)?).await?;
                match &record.birthday {
                    Some(birthday) => format!("{} - {}", record.name, birthday),
                    None => format!("{} - date not recorded.", record.name),
                }
            }
            Command::Birthdays => service.upcoming_birthdays().await?.to_string(),
            Command::Delete => {
                service.delete_contact(name_arg(args)?).await?;
                CONTACT_REMOVED_REPLY.to_string()
            }
        };

        Ok(Reply::text(text))
    }
}

/// The first `N` arguments; extra ones are ignored.
fn required<const N: usize>(args: &[String]) -> Result<[&str; N], CommandError> {
    if args.len() < N {
        return Err(CommandError::MissingArguments);
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}

fn name_arg(args: &[String]) -> Result<&str, CommandError> {
    args.first()
        .map(String::as_str)
        .ok_or(CommandError::MissingName)
}
