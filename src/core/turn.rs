//! Turn-resolution types: phases, selection outcomes, the pending-turn
//! slot, and completed-turn records.
//!
//! A turn is two selections followed by one deferred resolution. The
//! deferral is modeled as data: when the second card is selected the
//! verdict and its display delay are parked in a single `PendingTurn` slot,
//! and the driver applies it by calling `resolve_turn` after the delay has
//! passed. Reset empties the slot, which cancels the evaluation outright.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::card::CardId;

/// Phase of the turn state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Zero or one card selected; input is accepted.
    Idle,
    /// Two cards selected; a deferred evaluation is pending and further
    /// input is rejected.
    Resolving,
    /// Every pair matched. Terminal except through reset.
    Won,
}

/// Result of a `select_card` call.
///
/// Rejections carry no detail: invalid input is absorbed as a no-op, the
/// way a UI click on a dead control is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// Input absorbed; state unchanged.
    Rejected,
    /// Card flipped face-up; the turn is still open for a second selection.
    Flipped,
    /// Second card flipped; resolution is scheduled. Query `pending_turn`
    /// for the delay to observe before calling `resolve_turn`.
    Scheduled,
}

/// Single-slot handle for a deferred turn evaluation.
///
/// The verdict is computed when the second card is selected (it determines
/// which delay applies) and applied when the driver resolves the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTurn {
    /// First card selected this turn.
    pub first: CardId,

    /// Second card selected this turn.
    pub second: CardId,

    /// Whether the two cards carry the same symbol.
    pub matched: bool,

    /// Interval the driver waits before resolving, so the player perceives
    /// both faces before the board mutates.
    pub delay: Duration,
}

impl PendingTurn {
    /// Create a pending turn.
    #[must_use]
    pub fn new(first: CardId, second: CardId, matched: bool, delay: Duration) -> Self {
        Self {
            first,
            second,
            matched,
            delay,
        }
    }

    /// The two selected cards, in selection order.
    #[must_use]
    pub fn cards(&self) -> [CardId; 2] {
        [self.first, self.second]
    }
}

/// A completed two-card turn.
///
/// Appended to the game history when the turn resolves, regardless of
/// outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// First card selected.
    pub first: CardId,

    /// Second card selected.
    pub second: CardId,

    /// Whether the pair matched.
    pub matched: bool,

    /// 1-based move number; equals the move count after this turn resolved.
    pub move_number: u32,
}

impl TurnRecord {
    /// Create a new turn record.
    #[must_use]
    pub fn new(first: CardId, second: CardId, matched: bool, move_number: u32) -> Self {
        Self {
            first,
            second,
            matched,
            move_number,
        }
    }
}
