//! Address Book - Main entry point
//!
//! Runs the interactive command loop: one command per line on stdin, one
//! reply per command on stdout. Logs go to stderr.

use address_book::commands::CommandDispatcher;
use address_book::fixtures::demo_book;
use address_book::repositories::{ContactRepository, MemoryContactRepository};
use address_book::services::{ContactService, ContactServiceImpl, SystemClock};
use address_book::{AddressBook, Config};
use anyhow::Result;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only so replies on stdout stay clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(policy = ?config.birthday_policy, seed_demo = config.seed_demo, "Configuration loaded");

    let book = if config.seed_demo {
        demo_book()?
    } else {
        AddressBook::new()
    };

    let contact_repo =
        Arc::new(MemoryContactRepository::with_book(book)) as Arc<dyn ContactRepository>;
    let contact_service = Arc::new(ContactServiceImpl::new(
        contact_repo,
        Arc::new(SystemClock),
        config.birthday_policy,
    )) as Arc<dyn ContactService>;
    let dispatcher = CommandDispatcher::new(contact_service);

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout.write_all(b"Welcome to the assistant bot!\n").await?;

    loop {
        stdout.write_all(config.prompt.as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            info!("End of input");
            break;
        };

        let Some(reply) = dispatcher.dispatch_line(&line).await else {
            continue;
        };

        stdout.write_all(reply.text.as_bytes()).await?;
        stdout.write_all(b"\n").await?;

        if reply.exit {
            break;
        }
    }

    stdout.flush().await?;
    info!("Address book session closed");
    Ok(())
}
