//! # concentration
//!
//! Core engine for the Concentration memory-matching card game: a 16-card
//! board shuffled from 8 symbol pairs, a two-selection turn state machine
//! with a deferred resolution, a move counter, and win detection.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: no rendering, no input devices, no runtime. A
//!    presentation layer calls `select_card`/`resolve_turn`/`reset` and
//!    renders from the observable state.
//!
//! 2. **Deferral as data**: the perceptual delay between the second flip
//!    and the outcome is a single-slot [`PendingTurn`] the driver waits on,
//!    not a timer the engine owns. Reset clears the slot, which is the
//!    whole cancellation story.
//!
//! 3. **Forgiving input**: invalid selections are absorbed as no-ops the
//!    way a UI swallows clicks on dead controls. No error taxonomy.
//!
//! 4. **Deterministic shuffles**: boards come from a seeded ChaCha8 stream,
//!    so a seed reproduces an entire session.
//!
//! ## Modules
//!
//! - `core`: cards, RNG, configuration, turn records, state
//! - `board`: dealing (pairing + shuffling)
//! - `game`: the turn controller
//!
//! ## Example
//!
//! ```
//! use concentration::{Game, Phase, SelectOutcome};
//!
//! let mut game = Game::seeded(42);
//!
//! // Flip two cards; the second schedules a deferred evaluation.
//! let a = game.cards()[0].id;
//! let b = game.cards()[1].id;
//! assert_eq!(game.select_card(a), SelectOutcome::Flipped);
//! assert_eq!(game.select_card(b), SelectOutcome::Scheduled);
//!
//! // The driver waits `pending.delay`, then applies the outcome.
//! let pending = game.pending_turn().copied().unwrap();
//! let record = game.resolve_turn().unwrap();
//! assert_eq!(record.matched, pending.matched);
//! assert_eq!(game.move_count(), 1);
//! assert_eq!(game.phase(), Phase::Idle);
//! ```

pub mod board;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, DeckRng, GameConfig, GameSnapshot, GameState, PendingTurn, Phase, SelectOutcome,
    Symbol, TurnRecord,
};

pub use crate::board::{deal, DECK_SIZE, PAIR_COUNT};

pub use crate::game::Game;
