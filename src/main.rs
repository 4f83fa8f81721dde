//! Birthday Book - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout. Logs go to stderr so they
//! never mix with the conversation.

use anyhow::Result;
use birthday_book::{run_session, Config, JsonFileStore};
use chrono::Local;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep stdout for the user)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let store = JsonFileStore::new(config.book_path.clone());
    info!("Using address book at {}", store.path().display());
    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(e) = run_session(&store, stdin.lock(), stdout.lock(), || {
        Local::now().date_naive()
    }) {
        error!("Session failed: {:#}", e);
        return Err(e);
    }

    info!("Birthday Book shutdown complete");
    Ok(())
}
