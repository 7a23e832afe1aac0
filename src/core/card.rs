//! Card identity and face state.
//!
//! ## CardId
//!
//! Every card on the board has a unique ordinal id, assigned in duplication
//! order when the board is dealt (`0..DECK_SIZE`). Positions change when the
//! deck is shuffled; ids do not.
//!
//! ## Symbol
//!
//! The fixed set of 8 face symbols. The board is always built from every
//! symbol exactly twice, so the set is a closed enum rather than
//! game-supplied data.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within one dealt board.
///
/// Ids are ordinals assigned at deal time and are discarded with the board
/// on reset.
///
/// ```
/// use concentration::CardId;
///
/// let id = CardId::new(3);
/// assert_eq!(id.index(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ordinal as an index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u8> for CardId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Face symbol printed on a card.
///
/// Exactly two cards on any board carry each symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Anchor,
    Bell,
    Crown,
    Diamond,
    Gear,
    Heart,
    Moon,
    Star,
}

impl Symbol {
    /// Number of distinct symbols.
    pub const COUNT: usize = 8;

    /// All symbols, in duplication order.
    pub const ALL: [Symbol; Symbol::COUNT] = [
        Symbol::Anchor,
        Symbol::Bell,
        Symbol::Crown,
        Symbol::Diamond,
        Symbol::Gear,
        Symbol::Heart,
        Symbol::Moon,
        Symbol::Star,
    ];
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Symbol::Anchor => "anchor",
            Symbol::Bell => "bell",
            Symbol::Crown => "crown",
            Symbol::Diamond => "diamond",
            Symbol::Gear => "gear",
            Symbol::Heart => "heart",
            Symbol::Moon => "moon",
            Symbol::Star => "star",
        };
        write!(f, "{}", name)
    }
}

/// A single card: identity, symbol, and face state.
///
/// Created by the board dealer, mutated only by the turn controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Ordinal identity within the board.
    pub id: CardId,

    /// Face symbol. Two cards per board share each symbol.
    pub symbol: Symbol,

    /// Face-up and visible to the player.
    pub is_flipped: bool,

    /// Resolved as part of a matched pair; stays face-up permanently.
    pub is_matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub const fn face_down(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            is_flipped: false,
            is_matched: false,
        }
    }

    /// Whether the card can be selected: neither face-up nor matched.
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        !self.is_flipped && !self.is_matched
    }
}
