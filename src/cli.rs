//! Command-line interface for noughts_and_crosses.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts and crosses with persistent scores and move hints
#[derive(Parser, Debug)]
#[command(name = "noughts_and_crosses")]
#[command(about = "Two-player noughts and crosses in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML settings file
    #[arg(long, global = true, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Database file for names and scores (overrides the settings file)
    #[arg(long, global = true)]
    pub db_path: Option<PathBuf>,

    /// Keep names and scores in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Seconds of inactivity before a hint appears
        #[arg(long)]
        hint_after: Option<u64>,

        /// Never show inactivity hints
        #[arg(long)]
        no_hints: bool,
    },

    /// Print player names and scores
    Scores,

    /// Rename a player
    Rename {
        /// Player number
        #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
        slot: u8,

        /// New name (trimmed, at most 20 characters)
        name: String,
    },

    /// Zero all scores and restore default names
    ResetAll {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}
