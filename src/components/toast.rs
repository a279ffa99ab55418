// src/components/toast.rs
use yew::prelude::*;

use crate::deck::Notice;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Option<Notice>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    match &props.notice {
        Some(n) => html! {
            <div class="toast" role="status">
                <div class="toastTitle">{ n.title.clone() }</div>
                <div class="small">{ n.description.clone() }</div>
            </div>
        },
        None => html! {},
    }
}
