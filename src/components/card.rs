// src/components/card.rs
use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{HtmlElement, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::catalog::Church;
use crate::components::SwipeOverlay;
use crate::controller::{SwipeController, SwipeView};
use crate::gesture::{GestureConfig, SwipeDirection};
use crate::input::{PointerPhase, PointerSource};
use crate::scheduler::TimeoutScheduler;

type SharedController = Rc<RefCell<Option<SwipeController>>>;

#[derive(Properties, PartialEq)]
pub struct ChurchCardProps {
    pub church: Church,
    pub config: GestureConfig,
    pub on_swipe: Callback<SwipeDirection>,
    pub on_view_details: Callback<()>,
    /// True from release until the exit animation hands off to `on_swipe`.
    #[prop_or_default]
    pub on_committing: Callback<bool>,
    #[prop_or_default]
    pub saved: bool,
}

fn drive(
    controller: &SharedController,
    phase: PointerPhase,
    source: &impl PointerSource,
    card_ref: &NodeRef,
) {
    // clientWidth is 0 before layout; GestureConfig treats that as unmeasured
    let width = match phase {
        PointerPhase::Move => card_ref
            .cast::<HtmlElement>()
            .map(|el| f64::from(el.client_width())),
        _ => None,
    };
    if let Some(ctl) = controller.borrow_mut().as_mut() {
        ctl.handle(phase, source, width);
    }
}

#[function_component(ChurchCard)]
pub fn church_card(props: &ChurchCardProps) -> Html {
    let card_ref = use_node_ref();
    let view = use_state(SwipeView::default);
    let controller: SharedController = use_mut_ref(|| None);

    // One controller per mounted card; dropping it cancels a pending commit.
    {
        let controller = controller.clone();
        let view = view.clone();
        let config = props.config.clone();
        let on_swipe = props.on_swipe.clone();
        let on_committing = props.on_committing.clone();
        use_effect_with((), move |_| {
            let on_change = Callback::from(move |v: SwipeView| {
                on_committing.emit(v.committing.is_some());
                view.set(v);
            });
            *controller.borrow_mut() = Some(SwipeController::new(
                config,
                TimeoutScheduler,
                on_swipe,
                on_change,
            ));
            move || {
                if let Some(mut ctl) = controller.borrow_mut().take() {
                    ctl.cancel_pending();
                }
            }
        });
    }

    // Config can land after mount (async fetch); never rebuild mid-swipe.
    {
        let controller = controller.clone();
        use_effect_with(props.config.clone(), move |config| {
            if let Some(ctl) = controller.borrow_mut().as_mut() {
                ctl.set_config(config.clone());
            }
            || ()
        });
    }

    let mouse = |phase: PointerPhase| {
        let controller = controller.clone();
        let card_ref = card_ref.clone();
        Callback::from(move |e: MouseEvent| drive(&controller, phase, &e, &card_ref))
    };
    let touch = |phase: PointerPhase| {
        let controller = controller.clone();
        let card_ref = card_ref.clone();
        Callback::from(move |e: TouchEvent| drive(&controller, phase, &e, &card_ref))
    };

    // Buttons inside the card must not start a drag.
    let stop_mouse = Callback::from(|e: MouseEvent| e.stop_propagation());
    let stop_touch = Callback::from(|e: TouchEvent| e.stop_propagation());
    let on_view_details = props.on_view_details.reform(|_: MouseEvent| ());

    let church = &props.church;
    let hero_style = church
        .main_image()
        .map(|src| format!("background-image: url({src});"))
        .unwrap_or_default();

    html! {
        <div
            ref={card_ref.clone()}
            class={classes!("swipe-card", view.card_class(), "select-none")}
            onmousedown={mouse(PointerPhase::Start)}
            onmousemove={mouse(PointerPhase::Move)}
            onmouseup={mouse(PointerPhase::End)}
            onmouseleave={mouse(PointerPhase::Leave)}
            ontouchstart={touch(PointerPhase::Start)}
            ontouchmove={touch(PointerPhase::Move)}
            ontouchend={touch(PointerPhase::End)}
            ontouchcancel={touch(PointerPhase::Leave)}
        >
            <SwipeOverlay view={*view} />

            <div class="hero" style={hero_style}>
                <div class="heroShade"></div>
                <div class="heroText">
                    <div class="h2">{ church.name.clone() }</div>
                    if let Some(pct) = church.match_percentage {
                        <div class="match">{ "★ " }{ format!("{pct}% match") }</div>
                    }
                </div>
            </div>

            <div class="cardBody">
                <div class="row">
                    <div>
                        <div class="small">{ church.address.clone() }</div>
                        if let Some(miles) = church.distance {
                            <div class="small accent">{ format!("{miles} miles away") }</div>
                        }
                    </div>
                </div>

                <div class="chips">
                    if props.saved {
                        <span class="chip green">{ "♥ Saved" }</span>
                    }
                    <span class="chip blue">{ church.denomination.clone() }</span>
                    <span class="chip purple">{ church.worship_style.clone() }</span>
                    <span class="chip amber">{ church.size_category.clone() }</span>
                </div>

                <div class="times">
                    { for church.service_preview().iter().map(|d| html!{
                        <div class="timeRow" key={d.day.clone()}>
                            <span class="day">{ format!("{}:", d.day) }</span>
                            <span>{ d.times.join(", ") }</span>
                        </div>
                    })}
                    if church.has_more_service_times() {
                        <span class="small muted">{ "+ more times" }</span>
                    }
                </div>

                <button
                    class="ghost wide"
                    onmousedown={stop_mouse}
                    ontouchstart={stop_touch}
                    onclick={on_view_details}
                >{ "View Details" }</button>
            </div>

            <div class="gesture-hint gesture-hint-left">{ "←" }</div>
            <div class="gesture-hint gesture-hint-right">{ "→" }</div>
        </div>
    }
}
