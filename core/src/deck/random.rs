use super::*;

/// Shuffles the duplicated catalog with a seeded [`SmallRng`], so the same seed
/// always deals the same board.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomDeckGenerator {
    seed: u64,
}

impl RandomDeckGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DeckGenerator for RandomDeckGenerator {
    fn generate(self, catalog: &Catalog) -> Deck {
        use rand::prelude::*;

        let mut deck = Deck::unshuffled(catalog);
        if deck.is_empty() {
            log::debug!("Empty catalog, dealing an empty deck");
            return deck;
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        deck.shuffle_with(&mut rng);
        deck
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(size: u16) -> Catalog {
        Catalog::new(
            (0..size)
                .map(|i| Symbol::new(alloc::format!("symbol_{i}"), ""))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn every_symbol_dealt_exactly_twice() {
        for size in [0, 1, 2, 9, 40] {
            let deck = RandomDeckGenerator::new(u64::from(size)).generate(&catalog(size));

            assert_eq!(deck.len(), card_total(size));
            let mut counts = alloc::vec![0; usize::from(size)];
            for &symbol in deck.symbols() {
                counts[usize::from(symbol)] += 1;
            }
            assert!(counts.iter().all(|&count| count == 2), "{counts:?}");
        }
    }

    #[test]
    fn positions_are_not_biased() {
        const TRIALS: u64 = 6000;
        let catalog = catalog(3);
        let mut hits = [[0u32; 3]; 6];

        for seed in 0..TRIALS {
            let deck = RandomDeckGenerator::new(seed).generate(&catalog);
            for (position, &symbol) in deck.symbols().iter().enumerate() {
                hits[position][usize::from(symbol)] += 1;
            }
        }

        // each symbol fills two of six slots, so expect a third of the trials
        let expected = (TRIALS / 3) as u32;
        for row in hits {
            for count in row {
                assert!(count.abs_diff(expected) < expected / 10, "{hits:?}");
            }
        }
    }
}
