use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="section not-found">
            <div class="container">
                <h1 class="text-gradient">{"404"}</h1>
                <p>{"The page you're looking for doesn't exist or has moved."}</p>
                <Link<Route> to={Route::Home} classes="btn-primary">{"Back to Home"}</Link<Route>>
            </div>
        </section>
    }
}
