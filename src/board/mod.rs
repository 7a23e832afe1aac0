//! Board dealing: pairing and shuffling.
//!
//! The dealer is a leaf: it builds the 16-card deck from the fixed symbol
//! set and permutes it. It never touches selection, counters, or any other
//! session state.

use crate::core::card::{Card, CardId, Symbol};
use crate::core::rng::DeckRng;

/// Number of symbol pairs on a board.
pub const PAIR_COUNT: usize = Symbol::COUNT;

/// Total cards on a board.
pub const DECK_SIZE: usize = PAIR_COUNT * 2;

/// Deal a fresh board.
///
/// Duplicates the symbol set to 16 entries, assigns each card a unique
/// ordinal id in duplication order, all face-down and unmatched, then
/// applies a uniform random permutation. Total function: no failure modes.
#[must_use]
pub fn deal(rng: &mut DeckRng) -> Vec<Card> {
    let mut cards: Vec<Card> = Symbol::ALL
        .iter()
        .flat_map(|&symbol| [symbol, symbol])
        .enumerate()
        .map(|(i, symbol)| Card::face_down(CardId::new(i as u8), symbol))
        .collect();

    debug_assert_eq!(cards.len(), DECK_SIZE);
    rng.shuffle(&mut cards);
    cards
}
