use log::warn;
use serde::Serialize;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Serialize)]
struct ServiceQuery {
    service: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct HireButtonProps {
    /// Contact-form option to preselect.
    pub service: &'static str,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Opens the contact page with `service` already picked in the form.
#[function_component(HireButton)]
pub fn hire_button(props: &HireButtonProps) -> Html {
    let navigator = use_navigator();
    let service = props.service;

    let onclick = Callback::from(move |_: MouseEvent| {
        let Some(navigator) = navigator.as_ref() else {
            return;
        };
        if let Err(err) = navigator.push_with_query(&Route::Contact, &ServiceQuery { service }) {
            warn!("Failed to open contact page for {}: {:?}", service, err);
        }
    });

    html! {
        <button class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </button>
    }
}
