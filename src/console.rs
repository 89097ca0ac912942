//! Line-based terminal front-end.
//!
//! Reads commands from stdin, renders to stdout and polls the inactivity
//! monitor once a second.

use anyhow::{Context, Result};
use noughts_core::{MoveError, PlayerSlot, Position};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Duration, Instant, MissedTickBehavior, interval};
use tracing::{debug, info, instrument};

use crate::config::Settings;
use crate::hint::InactivityMonitor;
use crate::session::{GameSession, TurnReport};
use crate::storage::PersistenceGateway;

const HELP: &str = "\
Commands:
  1-9 or a cell name   place your marker (e.g. 5, center, top left)
  h                    show a hint now
  n                    new round (keeps scores)
  r                    reset scores and names
  name 1|2 <name>      rename a player
  s                    show scores
  q                    quit";

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Place a marker.
    Place(Position),
    /// Show a hint immediately.
    Hint,
    /// Start a new round.
    NewRound,
    /// Ask to reset scores and names.
    ResetAll,
    /// Rename a player.
    Rename(PlayerSlot, String),
    /// Print the scoreboard.
    Scores,
    /// Print the command list.
    Help,
    /// Leave.
    Quit,
}

impl ConsoleCommand {
    /// Parses one line, `None` if it is not a command.
    #[instrument]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        // Keyword is case-insensitive; the name keeps its case.
        if line
            .get(..5)
            .is_some_and(|keyword| keyword.eq_ignore_ascii_case("name "))
        {
            let (slot, name) = line[5..].trim_start().split_once(' ')?;
            let slot = PlayerSlot::from_number(slot.parse().ok()?)?;
            return Some(ConsoleCommand::Rename(slot, name.to_string()));
        }

        match line.to_lowercase().as_str() {
            "h" | "hint" => Some(ConsoleCommand::Hint),
            "n" | "new" => Some(ConsoleCommand::NewRound),
            "r" | "reset" => Some(ConsoleCommand::ResetAll),
            "s" | "scores" => Some(ConsoleCommand::Scores),
            "?" | "help" => Some(ConsoleCommand::Help),
            "q" | "quit" | "exit" => Some(ConsoleCommand::Quit),
            _ => Position::parse(line).map(ConsoleCommand::Place),
        }
    }
}

/// Renders the board, status and scores.
pub fn render<G: PersistenceGateway>(session: &GameSession<G>) -> String {
    format!(
        "\n{}\n\n{}\n{}",
        session.game().board().display(),
        session.status_line(),
        scoreboard(session)
    )
}

/// One-line scoreboard.
pub fn scoreboard<G: PersistenceGateway>(session: &GameSession<G>) -> String {
    let scores = session.scores();
    format!(
        "{} (X): {}  |  {} (O): {}  |  Draws: {}",
        scores.name(PlayerSlot::One),
        scores.wins(PlayerSlot::One),
        scores.name(PlayerSlot::Two),
        scores.wins(PlayerSlot::Two),
        scores.draws()
    )
}

fn describe_report(report: &TurnReport) -> Option<String> {
    report.winning_line().map(|line| {
        let cells: Vec<_> = line.cells().iter().map(|p| p.label()).collect();
        format!("Winning line: {}", cells.join(", "))
    })
}

/// Text for an explicit hint request; the status line once the game is over.
fn hint_text<G: PersistenceGateway>(session: &GameSession<G>) -> String {
    session
        .hint()
        .map(|hint| hint.to_string())
        .unwrap_or_else(|| session.status_line())
}

/// Runs the interactive game until `q` or end of input.
#[instrument(skip_all, fields(hints = *settings.hints_enabled()))]
pub async fn run<G: PersistenceGateway>(
    mut session: GameSession<G>,
    settings: &Settings,
) -> Result<()> {
    info!("Starting console game");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut monitor = InactivityMonitor::new(settings.hint_after(), Instant::now());
    if !*settings.hints_enabled() {
        monitor.stop();
    }
    let mut confirming_reset = false;

    println!("{}", HELP);
    println!("{}", render(&session));

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Some(hint) = monitor.poll(Instant::now(), &session) {
                    println!("{}", hint);
                }
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    debug!("Input closed");
                    break;
                };

                if confirming_reset {
                    confirming_reset = false;
                    if matches!(line.trim().to_lowercase().as_str(), "y" | "yes") {
                        session.reset_all();
                        restart_monitor(&mut monitor, settings);
                        println!("Scores and names reset.");
                        println!("{}", render(&session));
                    } else {
                        println!("Reset cancelled.");
                    }
                    continue;
                }

                match ConsoleCommand::parse(&line) {
                    Some(ConsoleCommand::Place(pos)) => match session.play_at(pos) {
                        Ok(report) => {
                            monitor.observe(&report, Instant::now());
                            if let Some(text) = describe_report(&report) {
                                println!("{}", text);
                            }
                            println!("{}", render(&session));
                        }
                        Err(MoveError::CellOccupied(_)) | Err(MoveError::GameNotActive) => {
                            debug!(position = %pos, "Ignoring move");
                        }
                        Err(e) => println!("{}", e),
                    },
                    Some(ConsoleCommand::Hint) => println!("{}", hint_text(&session)),
                    Some(ConsoleCommand::NewRound) => {
                        session.new_round();
                        restart_monitor(&mut monitor, settings);
                        println!("{}", render(&session));
                    }
                    Some(ConsoleCommand::ResetAll) => {
                        confirming_reset = true;
                        println!("Reset all scores and player names? This cannot be undone. [y/N]");
                    }
                    Some(ConsoleCommand::Rename(slot, name)) => match session.rename(slot, &name) {
                        Ok(stored) => {
                            println!("Player {} is now {}.", slot, stored);
                            println!("{}", session.status_line());
                        }
                        Err(e) => println!("{}", e),
                    },
                    Some(ConsoleCommand::Scores) => println!("{}", scoreboard(&session)),
                    Some(ConsoleCommand::Help) => println!("{}", HELP),
                    Some(ConsoleCommand::Quit) => break,
                    None => println!("Unrecognised input. Type ? for help."),
                }
            }
        }
    }

    info!("Console game finished");
    Ok(())
}

fn restart_monitor(monitor: &mut InactivityMonitor, settings: &Settings) {
    if *settings.hints_enabled() {
        monitor.restart(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_parse_moves() {
        assert_eq!(
            ConsoleCommand::parse("5"),
            Some(ConsoleCommand::Place(Position::Center))
        );
        assert_eq!(
            ConsoleCommand::parse("Top Left"),
            Some(ConsoleCommand::Place(Position::TopLeft))
        );
        assert_eq!(ConsoleCommand::parse("0"), None);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ConsoleCommand::parse(" q "), Some(ConsoleCommand::Quit));
        assert_eq!(ConsoleCommand::parse("N"), Some(ConsoleCommand::NewRound));
        assert_eq!(
            ConsoleCommand::parse("name 2 Ada Lovelace"),
            Some(ConsoleCommand::Rename(PlayerSlot::Two, "Ada Lovelace".to_string()))
        );
        assert_eq!(
            ConsoleCommand::parse("NAME 1 Ada"),
            Some(ConsoleCommand::Rename(PlayerSlot::One, "Ada".to_string()))
        );
        assert_eq!(ConsoleCommand::parse("name 3 Ada"), None);
        assert_eq!(ConsoleCommand::parse("name 1"), None);
    }

    #[test]
    fn test_hint_text_after_win_shows_result() {
        let mut session = GameSession::open(MemoryStore::new());
        assert_eq!(
            hint_text(&session),
            "Hint: Try placing your marker at row 2, column 2"
        );
        for index in [0, 3, 1, 4, 2] {
            session.play(index).unwrap();
        }
        assert_eq!(hint_text(&session), "Player 1 wins!");
    }

    #[test]
    fn test_render_shows_board_status_and_scores() {
        let mut session = GameSession::open(MemoryStore::new());
        session.play(0).unwrap();
        let text = render(&session);
        assert!(text.contains(" X | 2 | 3 "));
        assert!(text.contains("Player 2's turn"));
        assert!(text.contains("Player 1 (X): 0  |  Player 2 (O): 0  |  Draws: 0"));
    }
}
