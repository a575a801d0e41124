use alloc::vec::Vec;
use rand::rngs::SmallRng;

use crate::*;
pub use random::*;

mod random;

pub trait DeckGenerator {
    fn generate(self, catalog: &Catalog) -> Deck;
}

/// Deal order of a game: every catalog symbol exactly twice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    order: Vec<SymbolId>,
    pair_count: PairCount,
}

impl Deck {
    /// Validates an explicit deal order for a catalog of `pair_count` symbols.
    pub fn from_symbols(pair_count: PairCount, order: Vec<SymbolId>) -> Result<Self> {
        if usize::from(pair_count) > MAX_PAIRS || order.len() != card_total(pair_count) {
            return Err(GameError::InvalidDeck);
        }

        let mut seen = alloc::vec![0u8; usize::from(pair_count)];
        for &symbol in &order {
            let count = seen
                .get_mut(usize::from(symbol))
                .ok_or(GameError::InvalidDeck)?;
            *count += 1;
            if *count > 2 {
                return Err(GameError::InvalidDeck);
            }
        }

        Ok(Self { order, pair_count })
    }

    /// Every symbol of `catalog` twice, catalog order then catalog order again.
    pub fn unshuffled(catalog: &Catalog) -> Self {
        let order = catalog.ids().chain(catalog.ids()).collect();
        Self {
            order,
            pair_count: catalog.len(),
        }
    }

    pub fn pair_count(&self) -> PairCount {
        self.pair_count
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn symbols(&self) -> &[SymbolId] {
        &self.order
    }

    pub(crate) fn shuffle_with(&mut self, rng: &mut SmallRng) {
        fisher_yates_shuffle(&mut self.order, rng);
    }
}

/// In-place Fisher–Yates: walks down from the last slot, swapping each slot
/// `i` with a slot drawn uniformly from `0..=i`.
pub fn fisher_yates_shuffle<T>(items: &mut [T], rng: &mut SmallRng) {
    use rand::prelude::*;

    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
