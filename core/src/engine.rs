use alloc::vec::Vec;
use web_time::{Duration, Instant};

use crate::*;

/// How long a mismatched pair stays face-up before it is turned back over.
pub const MISMATCH_REVEAL_DURATION: Duration = Duration::from_millis(1000);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EngineState {
    Ready,
    Active,
    Won,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

/// Cards currently face-up and waiting on a verdict.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    Idle,
    OnePending(CardIndex),
    /// Two cards face-up, the board takes no input until they are resolved.
    Evaluating(CardIndex, CardIndex),
}

impl Selection {
    pub const fn is_locked(self) -> bool {
        matches!(self, Self::Evaluating(..))
    }

    pub const fn first(self) -> Option<CardIndex> {
        match self {
            Self::Idle => None,
            Self::OnePending(first) | Self::Evaluating(first, _) => Some(first),
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::Idle
    }
}

/// Handle for turning a mismatched pair back over once its reveal time is up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MismatchToken {
    game_id: GameId,
    first: CardIndex,
    second: CardIndex,
    due: Instant,
}

impl MismatchToken {
    pub const fn game_id(&self) -> GameId {
        self.game_id
    }

    pub const fn cards(&self) -> (CardIndex, CardIndex) {
        (self.first, self.second)
    }

    pub const fn due(&self) -> Instant {
        self.due
    }

    /// Time left before the token can be resolved.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.due.saturating_duration_since(now)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    Ignored,
    Flipped,
    Matched,
    Mismatched(MismatchToken),
    Won { elapsed_secs: u32 },
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        use SelectOutcome::*;
        match self {
            Ignored => false,
            Flipped => true,
            Matched => true,
            Mismatched(_) => true,
            Won { .. } => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// The token belongs to another game or an already settled pair.
    Stale,
    NotDue,
    Unflipped,
}

impl ResolveOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Unflipped)
    }
}

/// Board controller for one dealt game. `select` and `resolve_mismatch` are
/// the only ways its state changes.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchEngine {
    game_id: GameId,
    cards: Vec<Card>,
    pair_count: PairCount,
    matched_pairs: PairCount,
    selection: Selection,
    timer: GameTimer,
}

impl MatchEngine {
    pub fn new(deck: Deck, game_id: GameId) -> Self {
        Self {
            game_id,
            cards: deck.symbols().iter().copied().map(Card::new).collect(),
            pair_count: deck.pair_count(),
            matched_pairs: 0,
            selection: Selection::Idle,
            timer: GameTimer::new(),
        }
    }

    pub fn game_id(&self) -> GameId {
        self.game_id
    }

    pub fn state(&self) -> EngineState {
        if self.is_complete() {
            EngineState::Won
        } else if self.timer.is_started() {
            EngineState::Active
        } else {
            EngineState::Ready
        }
    }

    pub fn is_complete(&self) -> bool {
        self.matched_pairs == self.pair_count
    }

    pub fn is_locked(&self) -> bool {
        self.selection.is_locked()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(usize::from(index))
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn grid_columns(&self) -> usize {
        grid_columns(self.cards.len())
    }

    pub fn pair_count(&self) -> PairCount {
        self.pair_count
    }

    pub fn matched_pairs(&self) -> PairCount {
        self.matched_pairs
    }

    pub fn timer(&self) -> &GameTimer {
        &self.timer
    }

    pub fn elapsed_secs(&self, now: Instant) -> u32 {
        self.timer.elapsed_secs(now)
    }

    /// Whether selecting `index` right now would turn it over.
    pub fn can_select(&self, index: CardIndex) -> bool {
        match self.card(index) {
            Some(card) => !self.is_locked() && !card.is_revealed(),
            None => false,
        }
    }

    pub fn select(&mut self, index: CardIndex, now: Instant) -> Result<SelectOutcome> {
        let card = *self.validate_index(index)?;

        if self.selection.is_locked() {
            log::trace!("card {} ignored, board locked", index);
            return Ok(SelectOutcome::Ignored);
        }
        if self.selection.first() == Some(index) {
            log::trace!("card {} ignored, already pending", index);
            return Ok(SelectOutcome::Ignored);
        }
        if card.is_revealed() {
            log::trace!("card {} ignored, face {:?}", index, card.face());
            return Ok(SelectOutcome::Ignored);
        }

        if self.timer.start(now) {
            log::debug!("game {} timer started", self.game_id);
        }
        self.cards[usize::from(index)].set_face(CardFace::Revealed);

        let Selection::OnePending(first) = self.selection else {
            self.selection = Selection::OnePending(index);
            return Ok(SelectOutcome::Flipped);
        };

        self.selection = Selection::Evaluating(first, index);
        Ok(self.evaluate(first, index, now))
    }

    /// Turns a mismatched pair face-down again once `token` is due.
    pub fn resolve_mismatch(&mut self, token: MismatchToken, now: Instant) -> ResolveOutcome {
        if token.game_id != self.game_id
            || self.selection != Selection::Evaluating(token.first, token.second)
        {
            log::warn!(
                "stale mismatch token for game {} ({:?}), current game {}",
                token.game_id,
                token.cards(),
                self.game_id
            );
            return ResolveOutcome::Stale;
        }
        if now < token.due {
            return ResolveOutcome::NotDue;
        }

        self.cards[usize::from(token.first)].set_face(CardFace::Hidden);
        self.cards[usize::from(token.second)].set_face(CardFace::Hidden);
        self.selection = Selection::Idle;
        ResolveOutcome::Unflipped
    }

    fn evaluate(&mut self, first: CardIndex, second: CardIndex, now: Instant) -> SelectOutcome {
        let first_symbol = self.cards[usize::from(first)].symbol();
        let second_symbol = self.cards[usize::from(second)].symbol();

        if first_symbol != second_symbol {
            log::debug!("cards {} and {} mismatch", first, second);
            return SelectOutcome::Mismatched(MismatchToken {
                game_id: self.game_id,
                first,
                second,
                due: now + MISMATCH_REVEAL_DURATION,
            });
        }

        self.cards[usize::from(first)].set_face(CardFace::Matched);
        self.cards[usize::from(second)].set_face(CardFace::Matched);
        self.matched_pairs += 1;
        self.selection = Selection::Idle;
        log::debug!(
            "cards {} and {} matched, {}/{} pairs",
            first,
            second,
            self.matched_pairs,
            self.pair_count
        );

        if self.is_complete() {
            self.timer.stop(now);
            let elapsed_secs = self.timer.elapsed_secs(now);
            log::debug!("game {} won in {}s", self.game_id, elapsed_secs);
            SelectOutcome::Won { elapsed_secs }
        } else {
            SelectOutcome::Matched
        }
    }

    fn validate_index(&self, index: CardIndex) -> Result<&Card> {
        self.card(index).ok_or(GameError::InvalidCard)
    }
}
