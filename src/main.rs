// src/main.rs
mod catalog;
mod components;
mod config;
mod controller;
mod deck;
mod gesture;
mod input;
mod machine;
mod scheduler;

use gloo::storage::{LocalStorage, Storage};
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use catalog::load_catalog;
use components::{ChurchCard, ChurchDetails, SwipeControls, SwipeInstructions, Toast};
use config::{load_config, CONFIG_URL};
use deck::{Deck, DeckAction};
use gesture::{GestureConfig, SwipeDirection};

const LS_SEEN_INSTRUCTIONS: &str = "hasSeenSwipeInstructions";
const NOTICE_MS: u32 = 3000;

fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

fn initial_deck() -> Deck {
    match load_catalog() {
        Ok(churches) => {
            log::info!("catalog loaded: {} churches", churches.len());
            Deck::new(churches)
        }
        Err(e) => {
            log::error!("{e}");
            Deck::new(Vec::new())
        }
    }
}

/// Like/Dislike stay off from the card's release until the next card is up.
fn controls_locked(deck_animating: bool, card_committing: bool) -> bool {
    deck_animating || card_committing
}

#[function_component(App)]
fn app() -> Html {
    let config = use_state(GestureConfig::default);
    let deck = use_reducer(initial_deck);
    let show_instructions = use_state(|| false);
    let show_details = use_state(|| false);
    let card_committing = use_state_eq(|| false);

    // Load swipe-config.json once (relative so it works under the plug's path)
    {
        let config = config.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                config.set(load_config(CONFIG_URL).await);
            });
            || ()
        });
    }

    // First visit: show how-to once
    {
        let show_instructions = show_instructions.clone();
        use_effect_with((), move |_| {
            let seen = LocalStorage::get::<bool>(LS_SEEN_INSTRUCTIONS).unwrap_or(false);
            if !seen {
                show_instructions.set(true);
                if let Err(e) = LocalStorage::set(LS_SEEN_INSTRUCTIONS, true) {
                    log::warn!("could not persist instructions flag: {e:?}");
                }
            }
            || ()
        });
    }

    // Next card once the swiped one has animated out
    {
        let deck = deck.clone();
        let delay = config.commit_delay_ms;
        use_effect_with(deck.is_animating(), move |animating| {
            let handle = animating.then(|| {
                Timeout::new(delay, move || {
                    deck.dispatch(DeckAction::Advance {
                        seed: random_seed(),
                    })
                })
            });
            || drop(handle)
        });
    }

    // Auto-dismiss notices
    {
        let deck = deck.clone();
        use_effect_with(deck.notice().map(|n| n.id), move |id| {
            let handle = id.map(|id| {
                Timeout::new(NOTICE_MS, move || deck.dispatch(DeckAction::DismissNotice(id)))
            });
            || drop(handle)
        });
    }

    let on_swipe = {
        let deck = deck.clone();
        Callback::from(move |direction: SwipeDirection| {
            deck.dispatch(DeckAction::Swipe {
                direction,
                timestamp: now_iso(),
            })
        })
    };

    let on_committing = {
        let card_committing = card_committing.clone();
        Callback::from(move |busy: bool| card_committing.set(busy))
    };

    let on_close_instructions = {
        let show_instructions = show_instructions.clone();
        Callback::from(move |_: ()| show_instructions.set(false))
    };

    let on_view_details = {
        let show_details = show_details.clone();
        Callback::from(move |_: ()| show_details.set(true))
    };

    let on_close_details = {
        let show_details = show_details.clone();
        Callback::from(move |_: ()| show_details.set(false))
    };

    let body = if deck.is_empty() {
        html! {
            <div class="empty">
                <div class="h2">{ "No Churches Found" }</div>
                <div class="small muted">{ "There are no churches to display right now." }</div>
            </div>
        }
    } else if let Some(church) = deck.current() {
        html! {
            <div class="swipe-card-container">
                <ChurchCard
                    key={church.id.clone()}
                    church={church.clone()}
                    config={(*config).clone()}
                    on_swipe={on_swipe.clone()}
                    on_view_details={on_view_details}
                    on_committing={on_committing}
                    saved={deck.is_saved(&church.id)}
                />
                <SwipeControls
                    on_dislike={on_swipe.reform(|_: ()| SwipeDirection::Left)}
                    on_like={on_swipe.reform(|_: ()| SwipeDirection::Right)}
                    animating={controls_locked(deck.is_animating(), *card_committing)}
                />
            </div>
        }
    } else {
        html! { <div class="empty">{ "No more churches to display" }</div> }
    };

    html! {
        <div class="wrap">
            <div class="header">
                <div class="h1">{ "Discover Churches" }</div>
                <div class="sub">{ "Swipe right on churches you're interested in" }</div>
                <div class="pills">
                    <div class="pill">{ format!("{} saved", deck.saved_count()) }</div>
                    <div class="pill">{ format!("{} swiped", deck.matches().len()) }</div>
                </div>
            </div>

            { body }

            if let Some(church) = deck.current() {
                <ChurchDetails
                    church={church.clone()}
                    open={*show_details}
                    on_close={on_close_details}
                />
            }
            <SwipeInstructions open={*show_instructions} on_close={on_close_instructions} />
            <Toast notice={deck.notice().cloned()} />
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    yew::Renderer::<App>::new().render();
}
