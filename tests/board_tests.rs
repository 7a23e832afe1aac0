//! Board dealer tests: deal shape and shuffle statistics.

use std::collections::HashSet;

use concentration::{board, CardId, DeckRng, Symbol, DECK_SIZE, PAIR_COUNT};

#[test]
fn test_deal_invariants_across_seeds() {
    for seed in 0..64 {
        let mut rng = DeckRng::new(seed);
        let cards = board::deal(&mut rng);

        assert_eq!(cards.len(), DECK_SIZE);

        let ids: HashSet<_> = cards.iter().map(|card| card.id).collect();
        assert_eq!(ids.len(), DECK_SIZE, "duplicate id with seed {}", seed);

        for symbol in Symbol::ALL {
            let count = cards.iter().filter(|card| card.symbol == symbol).count();
            assert_eq!(count, 2, "symbol {} count with seed {}", symbol, seed);
        }

        assert_eq!(Symbol::ALL.len(), PAIR_COUNT);
        assert!(cards.iter().all(|card| card.is_selectable()));
    }
}

// =============================================================================
// Shuffle statistics
// =============================================================================
//
// The permutation must be uniform given a fair random source. These are
// statistical tests: bounds sit several standard deviations out, so a
// correct shuffle essentially never trips them while a biased one
// (e.g. one that favors the original order) reliably does.

const TRIALS: usize = 4000;

/// Where a given card id lands, over many independently seeded deals.
fn slot_counts(id: CardId) -> [usize; DECK_SIZE] {
    let mut counts = [0usize; DECK_SIZE];
    for seed in 0..TRIALS as u64 {
        let mut rng = DeckRng::new(seed);
        let cards = board::deal(&mut rng);
        let slot = cards.iter().position(|card| card.id == id).unwrap();
        counts[slot] += 1;
    }
    counts
}

#[test]
fn test_slot_distribution_is_flat() {
    // Expected 250 per slot; sigma ~15.3. Bounds at roughly 6 sigma.
    let counts = slot_counts(CardId::new(0));

    for (slot, &count) in counts.iter().enumerate() {
        assert!(
            (150..=350).contains(&count),
            "id 0 landed in slot {} {} times over {} deals",
            slot,
            count,
            TRIALS
        );
    }
}

#[test]
fn test_no_bias_toward_original_order() {
    // A uniform permutation of 16 elements leaves 1 fixed point on
    // average. The pre-shuffle slot of id i is i, so comparing ids to
    // slots measures exactly that.
    let mut fixed_points = 0usize;
    for seed in 0..TRIALS as u64 {
        let mut rng = DeckRng::new(seed);
        let cards = board::deal(&mut rng);
        fixed_points += cards
            .iter()
            .enumerate()
            .filter(|(slot, card)| card.id.index() == *slot)
            .count();
    }

    let mean = fixed_points as f64 / TRIALS as f64;
    assert!(
        (0.8..=1.2).contains(&mean),
        "mean fixed points {} over {} deals",
        mean,
        TRIALS
    );
}

#[test]
fn test_mean_slot_is_centered() {
    // Expected mean slot (15 - 0) / 2 = 7.5 for every id.
    for id in [CardId::new(0), CardId::new(9), CardId::new(15)] {
        let counts = slot_counts(id);
        let total: usize = counts
            .iter()
            .enumerate()
            .map(|(slot, &count)| slot * count)
            .sum();
        let mean = total as f64 / TRIALS as f64;

        assert!(
            (7.0..=8.0).contains(&mean),
            "mean slot {} for {}",
            mean,
            id
        );
    }
}
