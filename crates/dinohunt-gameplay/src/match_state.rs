//! Match (round) state.
//!
//! Player attacks only run while a match is in progress.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Read-only view of the match phase.
pub trait MatchState {
    /// Whether the match has started.
    fn started(&self) -> bool;

    /// Whether the match has finished.
    fn finished(&self) -> bool;

    /// Whether gameplay input should be processed.
    fn is_active(&self) -> bool {
        self.started() && !self.finished()
    }
}

/// Phase of a [`MatchClock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Waiting for the player to start
    #[default]
    Waiting,
    /// Match in progress
    Running,
    /// Match over
    Finished,
}

/// Match state with an optional time limit.
#[derive(Debug, Clone, Default)]
pub struct MatchClock {
    phase: MatchPhase,
    elapsed: f32,
    duration: Option<f32>,
}

impl MatchClock {
    /// Creates a clock in the waiting phase. `None` means no time limit.
    #[must_use]
    pub fn new(duration: Option<f32>) -> Self {
        Self {
            phase: MatchPhase::Waiting,
            elapsed: 0.0,
            duration,
        }
    }

    /// Starts the match. Ignored unless waiting.
    pub fn start(&mut self) {
        if self.phase == MatchPhase::Waiting {
            info!("Match started");
            self.phase = MatchPhase::Running;
        }
    }

    /// Ends the match. Ignored unless running.
    pub fn finish(&mut self) {
        if self.phase == MatchPhase::Running {
            info!("Match finished after {:.2}s", self.elapsed);
            self.phase = MatchPhase::Finished;
        }
    }

    /// Advances the clock, finishing the match when the limit is reached.
    pub fn tick(&mut self, dt: f32) {
        if self.phase != MatchPhase::Running {
            return;
        }
        self.elapsed += dt;
        if self.duration.is_some_and(|limit| self.elapsed >= limit) {
            self.finish();
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Seconds spent running.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Seconds left, if the match is timed.
    #[must_use]
    pub fn remaining(&self) -> Option<f32> {
        self.duration.map(|limit| (limit - self.elapsed).max(0.0))
    }
}

impl MatchState for MatchClock {
    fn started(&self) -> bool {
        self.phase != MatchPhase::Waiting
    }

    fn finished(&self) -> bool {
        self.phase == MatchPhase::Finished
    }
}
