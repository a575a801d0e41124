use crate::input::*;
use crate::utils::*;
use gloo::timers::callback::{Interval, Timeout};
use pawmatch_core as game;
use web_time::Instant;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CardEvent(CardMsg),
    UnflipDue(game::MismatchToken),
    UpdateTime,
    NewGame,
}

fn card_classes(face: game::CardFace, pressed: bool, locked: bool) -> Classes {
    use game::CardFace::*;

    let mut class = classes!(
        "card",
        match face {
            Hidden => classes!(),
            Revealed => classes!("flipped"),
            Matched => classes!("flipped", "matched"),
        }
    );
    if pressed {
        class.push("pressed");
    }
    if locked {
        class.push("locked");
    }
    class
}

#[derive(Properties, Clone, PartialEq)]
struct CardProps {
    index: game::CardIndex,
    symbol: game::Symbol,
    face: game::CardFace,
    #[prop_or_default]
    pressed: bool,
    #[prop_or_default]
    locked: bool,
    callback: Callback<CardMsg>,
}

#[function_component(CardView)]
fn card_component(props: &CardProps) -> Html {
    let CardProps {
        index,
        symbol,
        face,
        pressed,
        locked,
        callback,
    } = props.clone();

    let class = card_classes(face, pressed, locked);

    let onpointerdown = {
        let callback = callback.clone();
        Callback::from(move |e: PointerEvent| {
            let Some(press) =
                CardPress::from_pointer(index, e.pointer_id(), e.is_primary(), e.button())
            else {
                return;
            };
            // keeps touch from producing compatibility mouse events
            e.prevent_default();
            callback.emit(CardMsg::Press(press));
            log::trace!("card {} pointer down ({})", index, e.pointer_type());
        })
    };

    let onpointerup = {
        let callback = callback.clone();
        Callback::from(move |e: PointerEvent| {
            let Some(press) =
                CardPress::from_pointer(index, e.pointer_id(), e.is_primary(), e.button())
            else {
                return;
            };
            callback.emit(CardMsg::Release(press));
            log::trace!("card {} pointer up ({})", index, e.pointer_type());
        })
    };

    let onpointerleave = {
        let callback = callback.clone();
        Callback::from(move |e: PointerEvent| {
            callback.emit(CardMsg::Cancel {
                pointer_id: e.pointer_id(),
            });
        })
    };

    let onpointercancel = Callback::from(move |e: PointerEvent| {
        callback.emit(CardMsg::Cancel {
            pointer_id: e.pointer_id(),
        });
        log::trace!("card {} pointer cancel", index);
    });

    html! {
        <div {class} data-name={symbol.name.clone()} {onpointerdown} {onpointerup} {onpointerleave} {onpointercancel}>
            <div class="card-inner">
                <div class="card-face card-front">{"🐾"}</div>
                <div class="card-face card-back">
                    <img src={symbol.asset.clone()} alt={symbol.name.clone()}/>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct GameProps {
    pub catalog: game::Catalog,
    #[prop_or_default]
    pub seed: Option<u64>,
    #[prop_or_default]
    pub lang: Lang,
}

pub(crate) struct GameView {
    engine: game::MatchEngine,
    next_game_id: game::GameId,
    presses: PressTracker,
    prev_time: u32,
    tick_interval: Option<Interval>,
    _unflip_timeout: Option<Timeout>,
}

impl GameView {
    fn deal(catalog: &game::Catalog, seed: u64, game_id: game::GameId) -> game::MatchEngine {
        log::info!("Dealing game {} (seed {})", game_id, seed);
        game::start_new_game(catalog, seed, game_id)
    }

    fn create_timer(ctx: &Context<Self>) -> Interval {
        let link = ctx.link().clone();
        let millis = game::TICK_INTERVAL.as_millis().try_into().unwrap_or(u32::MAX);
        Interval::new(millis, move || link.send_message(Msg::UpdateTime))
    }

    fn schedule_unflip(&mut self, ctx: &Context<Self>, token: game::MismatchToken, now: Instant) {
        let link = ctx.link().clone();
        let millis = token
            .remaining(now)
            .as_millis()
            .try_into()
            .unwrap_or(u32::MAX)
            .max(1);
        self._unflip_timeout = Some(Timeout::new(millis, move || {
            link.send_message(Msg::UnflipDue(token))
        }));
    }

    fn select_card(&mut self, ctx: &Context<Self>, index: game::CardIndex) -> bool {
        use game::SelectOutcome::*;

        let now = Instant::now();
        let outcome = match self.engine.select(index, now) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("card {}: {}", index, err);
                return false;
            }
        };
        log::debug!("select card {}: {:?}", index, outcome);

        match outcome {
            Ignored | Flipped | Matched => {}
            Mismatched(token) => self.schedule_unflip(ctx, token, now),
            Won { elapsed_secs } => {
                log::info!("All pairs found in {}s", elapsed_secs);
                self.prev_time = elapsed_secs;
            }
        }

        if self.engine.timer().is_running() {
            if self.tick_interval.is_none() {
                self.tick_interval = Some(GameView::create_timer(ctx));
            }
        } else {
            self.tick_interval = None;
        }

        outcome.has_update()
    }

    fn get_time(&self) -> u32 {
        self.engine.elapsed_secs(Instant::now())
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        Self {
            engine: GameView::deal(&props.catalog, seed, 0),
            next_game_id: 1,
            presses: PressTracker::default(),
            prev_time: 0,
            tick_interval: None,
            _unflip_timeout: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            CardEvent(card_msg) => {
                log::trace!("card event: {:?}", card_msg);
                let was_pressed = self.presses.pressed_card();
                let updated = match self.presses.handle(card_msg) {
                    Some(index) => self.select_card(ctx, index),
                    None => false,
                };
                updated || was_pressed != self.presses.pressed_card()
            }
            UnflipDue(token) => {
                self._unflip_timeout = None;
                let now = Instant::now();
                match self.engine.resolve_mismatch(token, now) {
                    game::ResolveOutcome::NotDue => {
                        self.schedule_unflip(ctx, token, now);
                        false
                    }
                    outcome => outcome.has_update(),
                }
            }
            UpdateTime => {
                let time = self.get_time();
                if self.prev_time != time {
                    self.prev_time = time;
                    true
                } else {
                    false
                }
            }
            NewGame => {
                // dropping the handles cancels a pending unflip and the ticking clock
                self._unflip_timeout = None;
                self.tick_interval = None;
                self.presses = PressTracker::default();
                self.prev_time = 0;
                self.engine = GameView::deal(&ctx.props().catalog, js_random_seed(), self.next_game_id);
                self.next_game_id += 1;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let GameProps { catalog, lang, .. } = ctx.props();
        let lang = *lang;
        let elapsed = self.get_time();
        let state = self.engine.state();
        let complete = state.is_finished();
        let pressed = self.presses.pressed_card();
        let board_style = format!("--columns: {}", self.engine.grid_columns());

        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::NewGame
        });

        html! {
            <div class="pawmatch">
                <nav>
                    <span id="timer" class={classes!(state.is_ready().then_some("not-started"))}>{lang.running_time(elapsed)}</span>
                    <button class="new-game" onclick={cb_new_game.clone()}>{lang.new_game()}</button>
                </nav>
                <div id="game-board" style={board_style}>
                    {
                        for self.engine.cards().iter().enumerate().filter_map(|(index, card)| {
                            let index = game::CardIndex::try_from(index).ok()?;
                            let symbol = catalog.get(card.symbol())?.clone();
                            let face = card.face();
                            let locked = !self.engine.can_select(index);
                            let pressed = pressed == Some(index);
                            let callback = ctx.link().callback(Msg::CardEvent);
                            Some(html! {
                                <CardView {index} {symbol} {face} {pressed} {locked} {callback}/>
                            })
                        })
                    }
                </div>
                <section id="congrats" class={classes!("congrats", (!complete).then_some("hidden"))}>
                    <h2>{lang.congrats()}</h2>
                    <p id="final-time">{lang.final_time(elapsed)}</p>
                    <button onclick={cb_new_game}>{lang.new_game()}</button>
                </section>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_classes_follow_face() {
        use game::CardFace::*;

        let hidden = card_classes(Hidden, false, false);
        assert_eq!((&hidden).into_iter().count(), 1);
        assert!(!hidden.contains("flipped"));

        let revealed = card_classes(Revealed, false, true);
        assert!(revealed.contains("flipped"));
        assert!(revealed.contains("locked"));
        assert!(!revealed.contains("matched"));

        let matched = card_classes(Matched, false, true);
        assert!(matched.contains("flipped"));
        assert!(matched.contains("matched"));

        assert!(card_classes(Hidden, true, false).contains("pressed"));
    }
}
