use pawmatch_core::CardIndex;

/// A primary pointer going down on a card.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct CardPress {
    pub card: CardIndex,
    pub pointer_id: i32,
}

/// `MouseEvent.button` of the main button, also reported for touch and pen contact.
pub(crate) const MAIN_BUTTON: i16 = 0;

impl CardPress {
    /// Only the primary pointer's main button turns cards over.
    pub(crate) fn from_pointer(
        card: CardIndex,
        pointer_id: i32,
        is_primary: bool,
        button: i16,
    ) -> Option<Self> {
        (is_primary && button == MAIN_BUTTON).then_some(Self { card, pointer_id })
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum CardMsg {
    Press(CardPress),
    Release(CardPress),
    /// Pointer left the card or the browser took the gesture over.
    Cancel { pointer_id: i32 },
}

/// Folds mouse, pen and touch pointer events into at most one selection per
/// physical gesture: a press and a release of the same pointer on the same card.
#[derive(Debug, Default)]
pub(crate) struct PressTracker {
    current: Option<CardPress>,
}

impl PressTracker {
    pub(crate) fn pressed_card(&self) -> Option<CardIndex> {
        self.current.map(|press| press.card)
    }

    /// Returns the card to select, if `msg` completes a gesture.
    pub(crate) fn handle(&mut self, msg: CardMsg) -> Option<CardIndex> {
        match msg {
            CardMsg::Press(press) => {
                self.current = Some(press);
                None
            }
            CardMsg::Release(release) => match self.current.take() {
                Some(press) if press == release => Some(press.card),
                _ => None,
            },
            CardMsg::Cancel { pointer_id } => {
                if self
                    .current
                    .is_some_and(|press| press.pointer_id == pointer_id)
                {
                    self.current = None;
                }
                None
            }
        }
    }
}
