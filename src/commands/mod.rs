//! Command surface of the address book.
//!
//! The interactive loop hands every input line to [`CommandDispatcher`],
//! which answers with a [`Reply`].

mod command;
mod dispatcher;

pub use command::{parse_input, Command};
pub use dispatcher::*;
