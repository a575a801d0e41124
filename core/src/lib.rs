#![no_std]

extern crate alloc;

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

pub use card::*;
pub use deck::*;
pub use engine::*;
pub use error::*;
pub use timer::*;
pub use types::*;

mod card;
mod deck;
mod engine;
mod error;
mod timer;
mod types;

/// One distinct face of the deck: a name plus a reference to its image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub asset: String,
}

impl Symbol {
    pub fn new(name: impl Into<String>, asset: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            asset: asset.into(),
        }
    }
}

/// Ordered set of symbols with unique, non-empty names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct Catalog {
    symbols: Vec<Symbol>,
}

impl Catalog {
    pub fn new(symbols: Vec<Symbol>) -> Result<Self> {
        let mut names = BTreeSet::new();
        for symbol in &symbols {
            if symbol.name.is_empty() {
                return Err(GameError::EmptySymbolName);
            }
            if !names.insert(symbol.name.as_str()) {
                return Err(GameError::DuplicateSymbol(symbol.name.clone()));
            }
        }
        if symbols.len() > MAX_PAIRS {
            return Err(GameError::CatalogTooLarge);
        }
        Ok(Self { symbols })
    }

    pub fn len(&self) -> PairCount {
        // bounded by `new`
        self.symbols.len() as PairCount
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(usize::from(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = SymbolId> + use<> {
        0..self.len()
    }
}

impl Index<SymbolId> for Catalog {
    type Output = Symbol;

    fn index(&self, id: SymbolId) -> &Self::Output {
        &self.symbols[usize::from(id)]
    }
}

impl TryFrom<Vec<Symbol>> for Catalog {
    type Error = GameError;

    fn try_from(symbols: Vec<Symbol>) -> Result<Self> {
        Self::new(symbols)
    }
}

impl From<Catalog> for Vec<Symbol> {
    fn from(catalog: Catalog) -> Self {
        catalog.symbols
    }
}

/// Builds a freshly shuffled deck for `catalog` and the engine that plays it.
pub fn start_new_game(catalog: &Catalog, seed: u64, game_id: GameId) -> MatchEngine {
    let deck = RandomDeckGenerator::new(seed).generate(catalog);
    log::debug!(
        "new game {}: {} pairs, seed {}",
        game_id,
        deck.pair_count(),
        seed
    );
    MatchEngine::new(deck, game_id)
}
