// src/components/details.rs
use yew::prelude::*;

use crate::catalog::Church;

#[derive(Properties, PartialEq)]
pub struct ChurchDetailsProps {
    pub church: Church,
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(ChurchDetails)]
pub fn church_details(props: &ChurchDetailsProps) -> Html {
    if !props.open {
        return html! {};
    }
    let c = &props.church;
    let on_close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="modalBackdrop">
            <div class="modal" role="dialog" aria-modal="true">
                <div class="h2">{ c.name.clone() }</div>
                <div class="small muted">{ format!("{} · {} · {}", c.denomination, c.worship_style, c.service_formality) }</div>

                <p>{ c.description.clone() }</p>

                if let Some(intro) = &c.pastor_intro {
                    <p class="small">{ intro.clone() }</p>
                }

                if !c.emphasis.is_empty() {
                    <div class="chips">
                        { for c.emphasis.iter().map(|e| html!{ <span class="chip">{ e.clone() }</span> }) }
                    </div>
                }

                <div class="times">
                    { for c.service_times.iter().map(|d| html!{
                        <div class="timeRow" key={d.day.clone()}>
                            <span class="day">{ format!("{}:", d.day) }</span>
                            <span>{ d.times.join(", ") }</span>
                        </div>
                    })}
                </div>

                if let Some(url) = &c.website_url {
                    <a class="small" href={url.clone()} target="_blank" rel="noopener">{ "Website" }</a>
                }

                <div class="btnRow center">
                    <button class="ghost" onclick={on_close}>{ "Close" }</button>
                </div>
            </div>
        </div>
    }
}
