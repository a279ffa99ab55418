// src/components/overlay.rs
use yew::prelude::*;

use crate::controller::SwipeView;
use crate::gesture::SwipeDirection;

#[derive(Properties, PartialEq)]
pub struct SwipeOverlayProps {
    pub view: SwipeView,
}

/// YES / NO badge that fades in as the drag progresses.
#[function_component(SwipeOverlay)]
pub fn swipe_overlay(props: &SwipeOverlayProps) -> Html {
    let Some(direction) = props.view.direction else {
        return html! {};
    };
    let style = format!("opacity: {:.3};", props.view.overlay_opacity());

    let (class, icon, label) = match direction {
        SwipeDirection::Left => ("badge badge-no", "✕", "NO"),
        SwipeDirection::Right => ("badge badge-yes", "♥", "YES"),
    };

    html! {
        <div class="swipe-overlay">
            <div class={class} {style}>
                <span class="badgeIcon">{ icon }</span>
                <span class="badgeLabel">{ label }</span>
            </div>
        </div>
    }
}
