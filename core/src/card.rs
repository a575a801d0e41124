use serde::{Deserialize, Serialize};

use crate::SymbolId;

/// What the player can currently see of a card.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFace {
    Hidden,
    Revealed,
    /// Paired with its twin, stays face-up and takes no more input.
    Matched,
}

impl CardFace {
    pub const fn is_face_up(self) -> bool {
        matches!(self, Self::Revealed | Self::Matched)
    }
}

impl Default for CardFace {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    symbol: SymbolId,
    face: CardFace,
}

impl Card {
    pub const fn new(symbol: SymbolId) -> Self {
        Self {
            symbol,
            face: CardFace::Hidden,
        }
    }

    pub const fn symbol(&self) -> SymbolId {
        self.symbol
    }

    pub const fn face(&self) -> CardFace {
        self.face
    }

    pub const fn is_revealed(&self) -> bool {
        self.face.is_face_up()
    }

    pub const fn is_matched(&self) -> bool {
        matches!(self.face, CardFace::Matched)
    }

    pub(crate) fn set_face(&mut self, face: CardFace) {
        self.face = face;
    }
}
