//! Game session: one engine, one scoreboard, one persistence gateway.

use derive_getters::Getters;
use noughts_core::{
    Game, GameStatus, Marker, MoveError, MoveOutcome, NameError, PlayerSlot, Position,
    ScoreRecord, ScoreTracker, WinningLine, recommend,
};
use tracing::{debug, info, instrument, warn};

use crate::hint::Hint;
use crate::storage::PersistenceGateway;

/// What a front-end needs to redraw after a move.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct TurnReport {
    /// The move that was applied.
    outcome: MoveOutcome,
    /// Marker to move next, `None` once the game is over.
    next_turn: Option<Marker>,
    /// Completed line to highlight, if the move won.
    winning_line: Option<WinningLine>,
    /// Tallies after the move.
    scores: ScoreRecord,
}

impl TurnReport {
    /// True if the move ended the game.
    pub fn is_terminal(&self) -> bool {
        self.outcome.status.is_terminal()
    }
}

/// A sequence of games between two named players.
///
/// Owns its state outright, so any number of sessions can coexist.
#[derive(Debug)]
pub struct GameSession<G> {
    game: Game,
    scores: ScoreTracker,
    gateway: G,
}

impl<G: PersistenceGateway> GameSession<G> {
    /// Opens a session, restoring names and tallies from `gateway`.
    ///
    /// A missing or unreadable record starts from the defaults.
    #[instrument(skip(gateway))]
    pub fn open(gateway: G) -> Self {
        let scores = match gateway.load() {
            Ok(Some(record)) => {
                info!("Restored saved scores");
                ScoreTracker::from_record(record)
            }
            Ok(None) => {
                debug!("No saved scores, starting fresh");
                ScoreTracker::new()
            }
            Err(e) => {
                warn!(error = %e, "Could not load saved scores, starting fresh");
                ScoreTracker::new()
            }
        };

        Self {
            game: Game::new(),
            scores,
            gateway,
        }
    }

    /// The current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The scoreboard.
    pub fn scores(&self) -> &ScoreTracker {
        &self.scores
    }

    /// The persistence gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Plays the current marker at `index` (0-8).
    ///
    /// A move that ends the game updates the scoreboard and saves it.
    ///
    /// # Errors
    ///
    /// Propagates [`MoveError`] from the engine; nothing changes on error.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<TurnReport, MoveError> {
        let outcome = self.game.apply_move(index)?;

        if self.scores.record_outcome(outcome.status) {
            self.persist();
        }

        Ok(TurnReport {
            outcome,
            next_turn: self.game.turn(),
            winning_line: outcome.winning_line(),
            scores: self.scores.to_record(),
        })
    }

    /// Starts a new game, keeping names and tallies.
    #[instrument(skip(self))]
    pub fn new_round(&mut self) {
        info!("Starting new round");
        self.game.reset();
    }

    /// Zeroes tallies, restores default names, clears storage and starts a
    /// new game.
    #[instrument(skip(self))]
    pub fn reset_all(&mut self) {
        info!("Resetting scores, names and board");
        self.scores.reset();
        self.game.reset();
        if let Err(e) = self.gateway.clear() {
            warn!(error = %e, "Could not clear saved scores");
        }
    }

    /// Renames a player and saves, returning the stored name.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::Empty`] for a blank name; nothing is saved.
    #[instrument(skip(self))]
    pub fn rename(&mut self, slot: PlayerSlot, name: &str) -> Result<String, NameError> {
        let stored = self.scores.rename(slot, name)?.to_string();
        self.persist();
        Ok(stored)
    }

    /// Advisor's suggestion for the side to move, `None` once the game is over.
    #[instrument(skip(self))]
    pub fn hint(&self) -> Option<Hint> {
        let turn = self.game.turn()?;
        recommend(self.game.board(), turn).map(Hint::new)
    }

    /// Name of whoever plays `marker`.
    pub fn name_for(&self, marker: Marker) -> &str {
        self.scores.name(marker.slot())
    }

    /// One-line status: whose turn it is, or how the game ended.
    pub fn status_line(&self) -> String {
        match self.game.status() {
            GameStatus::InProgress { turn } => format!("{}'s turn", self.name_for(turn)),
            GameStatus::Won { marker, .. } => format!("{} wins!", self.name_for(marker)),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }

    /// Plays at a named position.
    ///
    /// # Errors
    ///
    /// See [`GameSession::play`].
    pub fn play_at(&mut self, pos: Position) -> Result<TurnReport, MoveError> {
        self.play(pos.to_index())
    }

    fn persist(&mut self) {
        if let Err(e) = self.gateway.save(self.scores.record()) {
            warn!(error = %e, "Could not save scores");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore, RECORD_KEY, StorageError};

    /// Gateway whose every call fails.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::new("disk on fire"))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::new("disk on fire"))
        }

        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::new("disk on fire"))
        }
    }

    #[test]
    fn test_broken_storage_never_blocks_play() {
        let mut session = GameSession::open(BrokenStore);
        for index in [0, 3, 1, 4] {
            session.play(index).unwrap();
        }
        let report = session.play(2).unwrap();
        assert!(report.is_terminal());
        assert_eq!(report.scores().player1_wins, 1);

        assert_eq!(session.rename(PlayerSlot::Two, "Ada").unwrap(), "Ada");
        session.reset_all();
        assert_eq!(session.scores().wins(PlayerSlot::One), 0);
    }

    #[test]
    fn test_malformed_record_falls_back_to_defaults() {
        let mut store = MemoryStore::new();
        store.set(RECORD_KEY, "{not json").unwrap();

        let session = GameSession::open(store);
        assert_eq!(session.scores(), &ScoreTracker::new());
    }

    #[test]
    fn test_status_line() {
        let mut session = GameSession::open(MemoryStore::new());
        session.rename(PlayerSlot::One, "Ada").unwrap();
        assert_eq!(session.status_line(), "Ada's turn");
        session.play(4).unwrap();
        assert_eq!(session.status_line(), "Player 2's turn");

        for index in [0, 3, 1, 5] {
            session.play(index).unwrap();
        }
        assert_eq!(session.status_line(), "Ada wins!");
    }
}
