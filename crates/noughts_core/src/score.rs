//! Score tallies and player names that outlive a single game.

use crate::{GameStatus, Marker, NameError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Longest accepted player name, in characters.
pub const MAX_NAME_CHARS: usize = 20;

/// Default name for the first player (plays X).
pub const DEFAULT_PLAYER1_NAME: &str = "Player 1";

/// Default name for the second player (plays O).
pub const DEFAULT_PLAYER2_NAME: &str = "Player 2";

/// Which of the two seats a player occupies.
///
/// The first player always plays X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum PlayerSlot {
    /// First player, X.
    #[display("1")]
    One,
    /// Second player, O.
    #[display("2")]
    Two,
}

impl PlayerSlot {
    /// Parses `1` or `2`.
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(PlayerSlot::One),
            2 => Some(PlayerSlot::Two),
            _ => None,
        }
    }

    /// The marker this seat plays.
    pub fn marker(self) -> Marker {
        match self {
            PlayerSlot::One => Marker::X,
            PlayerSlot::Two => Marker::O,
        }
    }

    fn default_name(self) -> &'static str {
        match self {
            PlayerSlot::One => DEFAULT_PLAYER1_NAME,
            PlayerSlot::Two => DEFAULT_PLAYER2_NAME,
        }
    }
}

/// Persistent scoreboard: tallies and both player names.
///
/// Serialized as `{"player1Name", "player2Name", "scores": {"player1",
/// "player2", "draws"}}`. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredRecord", into = "StoredRecord")]
pub struct ScoreRecord {
    /// Games won by the first player.
    pub player1_wins: u32,
    /// Games won by the second player.
    pub player2_wins: u32,
    /// Drawn games.
    pub draws: u32,
    /// First player's name.
    pub player1_name: String,
    /// Second player's name.
    pub player2_name: String,
}

impl Default for ScoreRecord {
    fn default() -> Self {
        Self {
            player1_wins: 0,
            player2_wins: 0,
            draws: 0,
            player1_name: DEFAULT_PLAYER1_NAME.to_string(),
            player2_name: DEFAULT_PLAYER2_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StoredRecord {
    player1_name: Option<String>,
    player2_name: Option<String>,
    scores: StoredScores,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct StoredScores {
    player1: u32,
    player2: u32,
    draws: u32,
}

impl From<StoredRecord> for ScoreRecord {
    fn from(stored: StoredRecord) -> Self {
        Self {
            player1_wins: stored.scores.player1,
            player2_wins: stored.scores.player2,
            draws: stored.scores.draws,
            player1_name: stored_name(stored.player1_name, PlayerSlot::One),
            player2_name: stored_name(stored.player2_name, PlayerSlot::Two),
        }
    }
}

impl From<ScoreRecord> for StoredRecord {
    fn from(record: ScoreRecord) -> Self {
        Self {
            player1_name: Some(record.player1_name),
            player2_name: Some(record.player2_name),
            scores: StoredScores {
                player1: record.player1_wins,
                player2: record.player2_wins,
                draws: record.draws,
            },
        }
    }
}

/// Cleans a stored name, falling back to the slot default when it is
/// missing or blank.
fn stored_name(raw: Option<String>, slot: PlayerSlot) -> String {
    raw.as_deref()
        .and_then(clean_name)
        .unwrap_or_else(|| slot.default_name().to_string())
}

/// Trims and truncates a name, or `None` if nothing is left.
fn clean_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(MAX_NAME_CHARS).collect::<String>().trim_end().to_string())
}

/// Tallies wins and draws across games.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreTracker {
    record: ScoreRecord,
}

impl ScoreTracker {
    /// Creates a tracker with zero tallies and default names.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a tracker from a record.
    ///
    /// Blank names fall back to the defaults and over-long names are
    /// truncated, so the tracker never holds an invalid name.
    #[instrument]
    pub fn from_record(record: ScoreRecord) -> Self {
        let clean = |raw: &str, slot: PlayerSlot| {
            clean_name(raw).unwrap_or_else(|| {
                warn!(%slot, "Name is blank, using default");
                slot.default_name().to_string()
            })
        };
        let player1_name = clean(&record.player1_name, PlayerSlot::One);
        let player2_name = clean(&record.player2_name, PlayerSlot::Two);

        Self {
            record: ScoreRecord {
                player1_name,
                player2_name,
                ..record
            },
        }
    }

    /// Snapshot of the current tallies and names.
    pub fn to_record(&self) -> ScoreRecord {
        self.record.clone()
    }

    /// Borrow the current record.
    pub fn record(&self) -> &ScoreRecord {
        &self.record
    }

    /// Name of the player in `slot`.
    pub fn name(&self, slot: PlayerSlot) -> &str {
        match slot {
            PlayerSlot::One => &self.record.player1_name,
            PlayerSlot::Two => &self.record.player2_name,
        }
    }

    /// Wins for the player in `slot`.
    pub fn wins(&self, slot: PlayerSlot) -> u32 {
        match slot {
            PlayerSlot::One => self.record.player1_wins,
            PlayerSlot::Two => self.record.player2_wins,
        }
    }

    /// Drawn games.
    pub fn draws(&self) -> u32 {
        self.record.draws
    }

    /// Credits a win to whoever plays `marker`.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, marker: Marker) {
        let tally = match marker.slot() {
            PlayerSlot::One => &mut self.record.player1_wins,
            PlayerSlot::Two => &mut self.record.player2_wins,
        };
        *tally = tally.saturating_add(1);
        info!(%marker, wins = *tally, "Win recorded");
    }

    /// Counts a drawn game.
    #[instrument(skip(self))]
    pub fn record_draw(&mut self) {
        self.record.draws = self.record.draws.saturating_add(1);
        info!(draws = self.record.draws, "Draw recorded");
    }

    /// Records a terminal status. Returns `false` for an in-progress status.
    #[instrument(skip(self))]
    pub fn record_outcome(&mut self, status: GameStatus) -> bool {
        match status {
            GameStatus::Won { marker, .. } => self.record_win(marker),
            GameStatus::Draw => self.record_draw(),
            GameStatus::InProgress { .. } => return false,
        }
        true
    }

    /// Renames the player in `slot`, returning the stored name.
    ///
    /// Whitespace is trimmed and names longer than [`MAX_NAME_CHARS`] are
    /// truncated.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::Empty`] for a blank name; the prior name is kept.
    #[instrument(skip(self))]
    pub fn rename(&mut self, slot: PlayerSlot, new_name: &str) -> Result<&str, NameError> {
        let Some(name) = clean_name(new_name) else {
            debug!(%slot, "Rejected blank name");
            return Err(NameError::Empty);
        };

        info!(%slot, name = %name, "Player renamed");
        let stored = match slot {
            PlayerSlot::One => &mut self.record.player1_name,
            PlayerSlot::Two => &mut self.record.player2_name,
        };
        *stored = name;
        Ok(stored.as_str())
    }

    /// Zeroes all tallies and restores the default names.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Scores and names reset");
        self.record = ScoreRecord::default();
    }
}
