// src/components/controls.rs
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SwipeControlsProps {
    pub on_dislike: Callback<()>,
    pub on_like: Callback<()>,
    #[prop_or_default]
    pub animating: bool,
}

#[function_component(SwipeControls)]
pub fn swipe_controls(props: &SwipeControlsProps) -> Html {
    let on_dislike = props.on_dislike.reform(|_: MouseEvent| ());
    let on_like = props.on_like.reform(|_: MouseEvent| ());

    html! {
        <div class={classes!("controls", props.animating.then_some("faded"))}>
            <button
                class="round no"
                onclick={on_dislike}
                disabled={props.animating}
                aria-label="Dislike"
            >{ "✕" }</button>
            <button
                class="round yes"
                onclick={on_like}
                disabled={props.animating}
                aria-label="Like"
            >{ "♥" }</button>
        </div>
    }
}
