//! Inactivity hints.
//!
//! The monitor owns the timing; the advisor stays a pure function. A
//! front-end polls [`InactivityMonitor::poll`] on a fixed tick and shows
//! whatever hint comes back.

use std::time::Duration;

use noughts_core::Position;
use tokio::time::Instant;
use tracing::{debug, instrument};

use crate::session::{GameSession, TurnReport};
use crate::storage::PersistenceGateway;

/// A suggested cell, shown to the player as a 1-indexed row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Hint: Try placing your marker at row {}, column {}", position.row(), position.column())]
pub struct Hint {
    position: Position,
}

impl Hint {
    /// Wraps a recommended position.
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// The recommended position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// 1-indexed row.
    pub fn row(&self) -> usize {
        self.position.row()
    }

    /// 1-indexed column.
    pub fn column(&self) -> usize {
        self.position.column()
    }
}

/// Tracks time since the last move and decides when to offer a hint.
///
/// A hint fires at most once per idle period; any move or reset starts a
/// new period.
#[derive(Debug, Clone)]
pub struct InactivityMonitor {
    threshold: Duration,
    last_activity: Instant,
    running: bool,
    shown: bool,
}

impl InactivityMonitor {
    /// Starts a running monitor with its idle period beginning at `now`.
    #[instrument]
    pub fn new(threshold: Duration, now: Instant) -> Self {
        Self {
            threshold,
            last_activity: now,
            running: true,
            shown: false,
        }
    }

    /// False once stopped by a finished game.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Starts a new idle period.
    pub fn touch(&mut self, now: Instant) {
        self.last_activity = now;
        self.shown = false;
    }

    /// Stops polling until [`InactivityMonitor::restart`].
    #[instrument(skip(self))]
    pub fn stop(&mut self) {
        debug!("Inactivity monitor stopped");
        self.running = false;
    }

    /// Resumes polling with a fresh idle period.
    #[instrument(skip(self))]
    pub fn restart(&mut self, now: Instant) {
        debug!("Inactivity monitor restarted");
        self.running = true;
        self.touch(now);
    }

    /// Updates the monitor after a move: new idle period, stopped if the
    /// game ended.
    pub fn observe(&mut self, report: &TurnReport, now: Instant) {
        self.touch(now);
        if report.is_terminal() {
            self.stop();
        }
    }

    /// Returns a hint if the game is in progress and the player has been
    /// idle for at least the threshold.
    #[instrument(skip(self, session))]
    pub fn poll<G: PersistenceGateway>(
        &mut self,
        now: Instant,
        session: &GameSession<G>,
    ) -> Option<Hint> {
        if !self.running || self.shown || !session.game().is_active() {
            return None;
        }
        if now.saturating_duration_since(self.last_activity) < self.threshold {
            return None;
        }

        let hint = session.hint()?;
        debug!(row = hint.row(), column = hint.column(), "Offering hint");
        self.shown = true;
        Some(hint)
    }
}
