use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::Reveal;
use crate::Route;

/// Call-to-action strip placed between the lighter and darker halves of a page.
#[function_component(TransitionBand)]
pub fn transition_band() -> Html {
    html! {
        <section class="transition-band">
            <div class="container">
                <Reveal>
                    <h2>{"Ready to make your words work harder?"}</h2>
                    <p>{"Share your project details and get a free quote today."}</p>
                    <Link<Route> to={Route::Contact} classes="btn-primary">{"Start Your Project"}</Link<Route>>
                </Reveal>
            </div>
        </section>
    }
}
