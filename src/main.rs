//! Contact Organizer - Main entry point
//!
//! Loads the address book, then reads one command per line from stdin until
//! `exit` or end of input.

use anyhow::{Context, Result};
use contact_organizer::{Config, JsonFileRepository, Session, SnapshotRepository, SystemClock};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only, stdout is for the user)
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let repo = JsonFileRepository::new(&config.book_path);
    let book = repo.load_or_default().with_context(|| {
        format!(
            "Failed to load address book from {}",
            config.book_path.display()
        )
    })?;

    info!(
        path = %config.book_path.display(),
        contacts = book.len(),
        page_size = config.page_size,
        "Starting contact organizer"
    );

    println!("Hi! I am your personal assistant. How can I help you?");

    let mut session = Session::new(book, repo, SystemClock, config.page_size);
    session.run(io::stdin().lock(), io::stdout().lock())?;

    println!();
    println!("Good bye!");
    info!("Contact organizer shutdown complete");
    Ok(())
}
