/// Position of a card on the board, which is also its index in the deck.
pub type CardIndex = u16;

/// Index of a symbol inside its [`Catalog`](crate::Catalog).
pub type SymbolId = u16;

/// Count type used for pairs, both total and matched.
pub type PairCount = u16;

/// Identifies one dealt game, so deferred work can tell games apart.
pub type GameId = u64;

/// Most pairs a catalog may hold, so every dealt card has a `CardIndex`.
pub const MAX_PAIRS: usize = (CardIndex::MAX as usize + 1) / 2;

/// Number of cards dealt for `pairs` pairs.
pub const fn card_total(pairs: PairCount) -> usize {
    pairs as usize * 2
}

/// Smallest column count that fits `cards` cards on a square-ish grid.
pub const fn grid_columns(cards: usize) -> usize {
    let mut columns = 0;
    while columns * columns < cards {
        columns += 1;
    }
    columns
}
