//! Game state: the board, the live selection, and the turn history.
//!
//! ## GameState
//!
//! The single mutable state for a session. Owned by the turn controller;
//! everything outside the crate reads it through accessors or the
//! serializable `GameSnapshot` projection.
//!
//! Invariants:
//! - `is_won()` is true iff every card is matched.
//! - The selection holds at most 2 ids and never a matched or repeated id.
//! - A pending turn exists iff the selection is full.
//!
//! ## GameSnapshot
//!
//! The observable `{cards, move_count, is_won}` a presentation layer polls
//! after each mutation. Plain owned data, serializable.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, CardId};
use super::rng::DeckRng;
use super::turn::{PendingTurn, Phase, TurnRecord};

/// Complete state of one game session.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Cards in board order. The position in this vec is the grid slot a
    /// presentation layer renders; ids are stable, positions are shuffled.
    cards: Vec<Card>,

    /// Board slot lookup by card id.
    slots: FxHashMap<CardId, usize>,

    /// Face-up, unresolved cards this turn, in selection order.
    selection: SmallVec<[CardId; 2]>,

    /// Deferred evaluation slot. `Some` exactly while resolving.
    pending: Option<PendingTurn>,

    /// Completed two-card turns.
    move_count: u32,

    /// Every card matched.
    won: bool,

    /// Resolved turns for the current board, oldest first.
    history: Vector<TurnRecord>,

    /// Shuffle RNG; keeps advancing across resets so one seed reproduces
    /// a whole session of boards.
    rng: DeckRng,
}

impl GameState {
    /// Create a state over a freshly dealt board.
    #[must_use]
    pub fn new(cards: Vec<Card>, rng: DeckRng) -> Self {
        let slots = Self::index_slots(&cards);
        Self {
            cards,
            slots,
            selection: SmallVec::new(),
            pending: None,
            move_count: 0,
            won: false,
            history: Vector::new(),
            rng,
        }
    }

    fn index_slots(cards: &[Card]) -> FxHashMap<CardId, usize> {
        cards
            .iter()
            .enumerate()
            .map(|(slot, card)| (card.id, slot))
            .collect()
    }

    /// Replace the board for a fresh game, discarding selection, pending
    /// evaluation, history, and counters. The RNG stream carries on.
    pub(crate) fn replace_board(&mut self, cards: Vec<Card>) {
        self.slots = Self::index_slots(&cards);
        self.cards = cards;
        self.selection.clear();
        self.pending = None;
        self.move_count = 0;
        self.won = false;
        self.history = Vector::new();
    }

    // === Cards ===

    /// All cards in board order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.slots.get(&id).map(|&slot| &self.cards[slot])
    }

    /// Look up a card mutably by id.
    pub(crate) fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        let slot = *self.slots.get(&id)?;
        Some(&mut self.cards[slot])
    }

    /// Whether every card on the board is matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|card| card.is_matched)
    }

    // === Selection ===

    /// The current selection, in selection order.
    #[must_use]
    pub fn selection(&self) -> &[CardId] {
        &self.selection
    }

    /// Append a card to the selection.
    ///
    /// The controller guarantees the id is fresh and the selection has
    /// room; both are asserted as defensive invariants.
    pub(crate) fn push_selection(&mut self, id: CardId) {
        debug_assert!(self.selection.len() < 2, "selection already full");
        debug_assert!(!self.selection.contains(&id), "duplicate id in selection");
        self.selection.push(id);
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // === Turn progression ===

    /// Completed two-card turns so far.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Count one completed turn and return the new total.
    pub(crate) fn count_move(&mut self) -> u32 {
        self.move_count += 1;
        self.move_count
    }

    /// Whether the game has been won.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    pub(crate) fn set_won(&mut self) {
        self.won = true;
    }

    /// The pending deferred evaluation, if a turn is resolving.
    #[must_use]
    pub fn pending_turn(&self) -> Option<&PendingTurn> {
        self.pending.as_ref()
    }

    pub(crate) fn set_pending(&mut self, pending: PendingTurn) {
        debug_assert!(self.pending.is_none(), "pending turn already scheduled");
        self.pending = Some(pending);
    }

    pub(crate) fn take_pending(&mut self) -> Option<PendingTurn> {
        self.pending.take()
    }

    /// Current phase of the turn state machine, derived from state.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.won {
            Phase::Won
        } else if self.pending.is_some() {
            Phase::Resolving
        } else {
            Phase::Idle
        }
    }

    // === History ===

    /// Resolved turns for the current board, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    pub(crate) fn record_turn(&mut self, record: TurnRecord) {
        self.history.push_back(record);
    }

    // === RNG ===

    /// The seed this session was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub(crate) fn rng_mut(&mut self) -> &mut DeckRng {
        &mut self.rng
    }

    // === Observation ===

    /// The observable state a presentation layer renders from.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            cards: self.cards.clone(),
            move_count: self.move_count,
            is_won: self.won,
        }
    }
}

/// Read-only observable state for a presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Cards in board order.
    pub cards: Vec<Card>,

    /// Completed two-card turns.
    pub move_count: u32,

    /// Whether every pair has been found.
    pub is_won: bool,
}
