//! Core engine types: cards, RNG, configuration, turn records, state.
//!
//! The board dealer and the turn controller are built on these; nothing in
//! this module performs a state transition on its own.

pub mod card;
pub mod config;
pub mod rng;
pub mod state;
pub mod turn;

pub use card::{Card, CardId, Symbol};
pub use config::GameConfig;
pub use rng::DeckRng;
pub use state::{GameSnapshot, GameState};
pub use turn::{PendingTurn, Phase, SelectOutcome, TurnRecord};
