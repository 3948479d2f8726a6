use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod config;
mod contact;
mod content;
mod media;
mod styles;
mod components {
    pub mod about_section;
    pub mod contact_form;
    pub mod contact_section;
    pub mod footer;
    pub mod header;
    pub mod hire_button;
    pub mod hero;
    pub mod lazy_image;
    pub mod modal;
    pub mod notification;
    pub mod page_transition;
    pub mod pricing_section;
    pub mod reveal;
    pub mod services_section;
    pub mod testimonials;
    pub mod transition_band;
    pub mod why_choose_me;
    pub mod writing_services;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod page_header;
    pub mod service_detail;
    pub mod services;
    pub mod statement;
}

use components::{footer::Footer, header::Header, page_transition::PageTransition};
use pages::{
    about::About,
    contact::Contact,
    home::Home,
    not_found::NotFound,
    service_detail::ServiceDetail,
    services::ServicesPage,
    statement::{Mission, Vision},
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/services/:slug")]
    ServiceDetail { slug: String },
    #[at("/about")]
    About,
    #[at("/mission")]
    Mission,
    #[at("/vision")]
    Vision,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    // Keyed by path so every navigation remounts the transition.
    let path = routes.to_path();
    let page = match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <ServicesPage /> }
        }
        Route::ServiceDetail { slug } => {
            info!("Rendering Service page for {}", slug);
            html! { <ServiceDetail slug={slug} /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Mission => {
            info!("Rendering Mission page");
            html! { <Mission /> }
        }
        Route::Vision => {
            info!("Rendering Vision page");
            html! { <Vision /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    };

    html! { <PageTransition key={path}>{page}</PageTransition> }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{styles::GLOBAL_CSS}</style>
            <Header />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
