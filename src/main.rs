//! Contact Book - Main entry point
//!
//! Interactive assistant over a personal contact book. Commands are read from
//! stdin, replies go to stdout, and logs go to stderr.

use anyhow::Result;
use contact_book::book::SystemClock;
use contact_book::repositories::{load_or_default, JsonFileRepository};
use contact_book::{Config, Session};
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only to keep stdout for the conversation)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Using address book at {}", config.data_file.display());

    let repo = JsonFileRepository::new(&config.data_file);
    let book = load_or_default(&repo);
    info!("Loaded {} contacts", book.len());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let clock = SystemClock;
    let mut session = Session::new(book, &repo, &clock);

    let result = runtime.block_on(async {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        session.run(stdin, &mut stdout, interrupted()).await
    });

    // The blocking stdin read cannot be cancelled; don't wait for it.
    runtime.shutdown_background();

    let reason = result?;
    info!(?reason, "Contact book shutdown complete");
    Ok(())
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
