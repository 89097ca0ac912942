//! Noughts and crosses - terminal game with persistent scores.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts_and_crosses::{
    GameSession, MemoryStore, PersistenceGateway, PlayerSlot, Settings, SqliteStore, console,
};
use std::io::Write;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let mut settings = Settings::load_or_default(&cli.config)?;
    if let Some(db_path) = cli.db_path {
        settings = settings.with_db_path(db_path);
    }
    let command = cli.command.unwrap_or(Command::Play {
        hint_after: None,
        no_hints: false,
    });

    if cli.ephemeral {
        info!("Using in-memory storage");
        run(command, settings, MemoryStore::new()).await
    } else {
        let db_path = settings.db_path().to_string_lossy().into_owned();
        let store = SqliteStore::open(db_path).context("Failed to open score database")?;
        run(command, settings, store).await
    }
}

/// Dispatches a command against an opened store.
#[instrument(skip(settings, store))]
async fn run<G: PersistenceGateway>(command: Command, settings: Settings, store: G) -> Result<()> {
    let mut session = GameSession::open(store);

    match command {
        Command::Play {
            hint_after,
            no_hints,
        } => {
            let mut settings = settings;
            if let Some(secs) = hint_after {
                settings = settings.with_hint_after_secs(secs);
            }
            if no_hints {
                settings = settings.without_hints();
            }
            console::run(session, &settings).await
        }
        Command::Scores => {
            println!("{}", console::scoreboard(&session));
            Ok(())
        }
        Command::Rename { slot, name } => {
            let slot = PlayerSlot::from_number(slot).context("Player number must be 1 or 2")?;
            let stored = session.rename(slot, &name)?;
            println!("Player {} is now {}.", slot, stored);
            Ok(())
        }
        Command::ResetAll { yes } => {
            if !yes && !confirm("Reset all scores and player names? This cannot be undone. [y/N] ")? {
                println!("Reset cancelled.");
                return Ok(());
            }
            session.reset_all();
            println!("Scores and names reset.");
            Ok(())
        }
    }
}

/// Asks a yes/no question on stdin.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Logs to stderr so the board on stdout stays readable.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
