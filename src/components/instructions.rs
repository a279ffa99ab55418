// src/components/instructions.rs
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SwipeInstructionsProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(SwipeInstructions)]
pub fn swipe_instructions(props: &SwipeInstructionsProps) -> Html {
    if !props.open {
        return html! {};
    }
    let on_close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="modalBackdrop">
            <div class="modal" role="dialog" aria-modal="true">
                <div class="h2">{ "How to Use Chinder" }</div>
                <div class="small muted">{ "Find your perfect church match with our simple swipe system." }</div>

                <div class="howRow">
                    <div>
                        <div class="howTitle">{ "Swipe Right" }</div>
                        <div class="small muted">{ "For churches you're interested in" }</div>
                    </div>
                    <div class="yesText">{ "YES" }</div>
                </div>

                <div class="howRow">
                    <div>
                        <div class="howTitle">{ "Swipe Left" }</div>
                        <div class="small muted">{ "For churches you're not interested in" }</div>
                    </div>
                    <div class="noText">{ "NO" }</div>
                </div>

                <div class="note small">
                    { "You can also tap the buttons below each church card to like or dislike without swiping." }
                </div>

                <div class="btnRow center">
                    <button onclick={on_close}>{ "Got it!" }</button>
                </div>
            </div>
        </div>
    }
}
