//! Game session configuration: resolution delays and the shuffle seed.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timing and seeding parameters for a game session.
///
/// The delays are the interval a driver must wait between the second card
/// of a turn being selected and the turn being resolved, so the player can
/// perceive both faces before the board mutates. A matched pair locks in
/// faster than a mismatch flips back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Delay before a matched pair is locked in.
    pub match_delay: Duration,

    /// Delay before a mismatched pair flips back face-down.
    pub mismatch_delay: Duration,

    /// Shuffle seed. Same seed produces the same sequence of boards.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            match_delay: Duration::from_millis(600),
            mismatch_delay: Duration::from_millis(1000),
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Create a new config with a custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom match delay.
    pub fn with_match_delay(mut self, delay: Duration) -> Self {
        self.match_delay = delay;
        self
    }

    /// Create a new config with a custom mismatch delay.
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// The delay to observe before resolving a turn with this verdict.
    #[must_use]
    pub fn delay_for(&self, matched: bool) -> Duration {
        if matched {
            self.match_delay
        } else {
            self.mismatch_delay
        }
    }
}
