//! The turn controller.
//!
//! `Game` owns the mutable session state and runs the match-evaluation
//! state machine:
//!
//! ```text
//! Idle --select(2nd)--> Resolving --resolve--> Idle
//!                                \--resolve (last pair)--> Won
//! any --reset--> Idle
//! ```
//!
//! Invalid input (unknown id, face-up or matched card, selection while a
//! turn is resolving) is absorbed as a no-op, never surfaced as an error:
//! the operations mirror UI input events, which are forgiving by nature.
//!
//! ## Driving the deferred evaluation
//!
//! Selecting the second card of a turn does not mutate the pair; it parks
//! the verdict in a single-slot [`PendingTurn`] carrying the delay to
//! observe. The driver waits that long, then calls [`Game::resolve_turn`].
//! [`Game::reset`] empties the slot, so a resolution scheduled against a
//! previous board can never fire.

use crate::board;
use crate::core::card::{Card, CardId};
use crate::core::config::GameConfig;
use crate::core::rng::DeckRng;
use crate::core::state::{GameSnapshot, GameState};
use crate::core::turn::{PendingTurn, Phase, SelectOutcome, TurnRecord};

/// A game session: configuration plus owned state.
///
/// ```
/// use concentration::{Game, SelectOutcome};
///
/// let mut game = Game::seeded(42);
/// let first = game.cards()[0].id;
///
/// assert_eq!(game.select_card(first), SelectOutcome::Flipped);
/// assert!(game.card(first).unwrap().is_flipped);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game {
    /// Create a game with the given configuration and deal the first board.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut rng = DeckRng::new(config.seed);
        let cards = board::deal(&mut rng);
        Self {
            config,
            state: GameState::new(cards, rng),
        }
    }

    /// Create a game with default timing and the given shuffle seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameConfig::default().with_seed(seed))
    }

    /// Create a game seeded from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        let mut rng = DeckRng::from_entropy();
        let config = GameConfig::default().with_seed(rng.seed());
        let cards = board::deal(&mut rng);
        Self {
            config,
            state: GameState::new(cards, rng),
        }
    }

    // === Operations ===

    /// Select a card by id.
    ///
    /// Rejected as a no-op while a turn is resolving, for an unknown id,
    /// and for a card already face-up or matched (which also makes a
    /// repeated id within one turn structurally impossible). Flips the
    /// card otherwise; the second flip of a turn schedules the deferred
    /// evaluation and returns [`SelectOutcome::Scheduled`].
    pub fn select_card(&mut self, id: CardId) -> SelectOutcome {
        if self.state.pending_turn().is_some() {
            log::trace!("select {} rejected: turn resolving", id);
            return SelectOutcome::Rejected;
        }
        debug_assert!(self.state.selection().len() < 2, "idle with full selection");

        match self.state.card_mut(id) {
            Some(card) if card.is_selectable() => {
                card.is_flipped = true;
            }
            Some(_) => {
                log::trace!("select {} rejected: already face-up", id);
                return SelectOutcome::Rejected;
            }
            None => {
                log::trace!("select {} rejected: unknown id", id);
                return SelectOutcome::Rejected;
            }
        }
        self.state.push_selection(id);
        log::debug!("{} flipped", id);

        if self.state.selection().len() < 2 {
            return SelectOutcome::Flipped;
        }

        let first = self.state.selection()[0];
        let second = self.state.selection()[1];
        let matched = self.symbols_match(first, second);
        let delay = self.config.delay_for(matched);
        self.state
            .set_pending(PendingTurn::new(first, second, matched, delay));
        log::debug!(
            "turn scheduled: {} vs {} ({}), resolve after {:?}",
            first,
            second,
            if matched { "match" } else { "mismatch" },
            delay
        );
        SelectOutcome::Scheduled
    }

    fn symbols_match(&self, first: CardId, second: CardId) -> bool {
        debug_assert_ne!(first, second, "selection cannot repeat a card");
        match (self.state.card(first), self.state.card(second)) {
            (Some(a), Some(b)) => a.symbol == b.symbol,
            _ => false,
        }
    }

    /// Apply the pending evaluation, if any.
    ///
    /// The driver calls this once the pending turn's delay has passed. On
    /// a match both cards lock in face-up; on a mismatch both revert
    /// face-down. Either way the move counter advances by one, the
    /// selection empties, and the completed turn is recorded and returned.
    /// Matching the final pair transitions the game to [`Phase::Won`].
    ///
    /// Returns `None` when no turn is pending, including after a reset
    /// cancelled the evaluation.
    pub fn resolve_turn(&mut self) -> Option<TurnRecord> {
        let pending = self.state.take_pending()?;
        debug_assert_ne!(pending.first, pending.second, "selection cannot repeat a card");

        for id in pending.cards() {
            if let Some(card) = self.state.card_mut(id) {
                if pending.matched {
                    // Matched cards stay face-up permanently.
                    card.is_matched = true;
                } else {
                    card.is_flipped = false;
                }
            }
        }

        self.state.clear_selection();
        let move_number = self.state.count_move();

        if pending.matched && self.state.all_matched() {
            self.state.set_won();
            log::debug!("all pairs found in {} moves", move_number);
        }

        let record = TurnRecord::new(pending.first, pending.second, pending.matched, move_number);
        self.state.record_turn(record);
        log::debug!(
            "move {}: {} vs {} -> {}",
            move_number,
            record.first,
            record.second,
            if record.matched { "match" } else { "mismatch" }
        );
        Some(record)
    }

    /// Start a fresh game: deal a new board, clear the selection, the
    /// history, and both counters, and cancel any pending evaluation.
    ///
    /// Valid from any phase, including `Won` and mid-`Resolving`. The RNG
    /// stream carries on, so one seed yields a deterministic sequence of
    /// boards.
    pub fn reset(&mut self) {
        if self.state.pending_turn().is_some() {
            log::debug!("reset cancels a pending turn");
        }
        let cards = board::deal(self.state.rng_mut());
        self.state.replace_board(cards);
        log::debug!("board reset (seed {})", self.state.seed());
    }

    // === Read surface ===

    /// The full session state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// All cards in board order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.state.cards()
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.state.card(id)
    }

    /// The current selection, in selection order.
    #[must_use]
    pub fn selection(&self) -> &[CardId] {
        self.state.selection()
    }

    /// Completed two-card turns so far.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.state.move_count()
    }

    /// Whether every pair has been found.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    /// Current phase of the turn state machine.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// The pending deferred evaluation, if a turn is resolving.
    #[must_use]
    pub fn pending_turn(&self) -> Option<&PendingTurn> {
        self.state.pending_turn()
    }

    /// Resolved turns for the current board, oldest first.
    #[must_use]
    pub fn history(&self) -> &im::Vector<TurnRecord> {
        self.state.history()
    }

    /// The observable state a presentation layer renders from.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }
}
