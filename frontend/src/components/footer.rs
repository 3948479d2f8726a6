use chrono::Datelike;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::company::{BRAND, TAGLINE};
use crate::content::SERVICES;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    let back_to_top = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        <span class="logo-mark">{"W"}</span>
                        <span class="logo-text">{BRAND}</span>
                    </Link<Route>>
                    <p class="footer-tagline text-gradient">{TAGLINE}</p>
                    <p>
                        {"Professional writing services for students, professionals and businesses. Clear, polished words that create lasting impact."}
                    </p>
                    <div class="social-links">
                        <a href="#" aria-label="LinkedIn">{"in"}</a>
                        <a href="#" aria-label="Instagram">{"ig"}</a>
                        <a href="#" aria-label="Twitter">{"x"}</a>
                        <a href={config::mailto("Hello")} aria-label="Email">{"@"}</a>
                    </div>
                </div>
                <div class="footer-column">
                    <h4>{"Services"}</h4>
                    <ul>
                        { for SERVICES.iter().take(4).map(|service| html! {
                            <li>
                                <Link<Route> to={Route::ServiceDetail { slug: service.slug.to_string() }}>
                                    {service.title}
                                </Link<Route>>
                            </li>
                        }) }
                    </ul>
                </div>
                <div class="footer-column">
                    <h4>{"Company"}</h4>
                    <ul>
                        <li><Link<Route> to={Route::About}>{"About Me"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Mission}>{"Mission"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Vision}>{"Vision"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>></li>
                    </ul>
                </div>
                <div class="footer-column">
                    <h4>{"Get In Touch"}</h4>
                    <ul>
                        <li><a href={config::mailto("Project inquiry")}>{config::CONTACT_EMAIL}</a></li>
                        <li><a href={config::WHATSAPP_URL} target="_blank" rel="noopener noreferrer">{config::WHATSAPP_DISPLAY}</a></li>
                        <li>{config::LOCATION}</li>
                    </ul>
                </div>
            </div>
            <div class="container footer-bottom">
                <span>{format!("© {} {}. All rights reserved.", year, BRAND)}</span>
                <button class="back-to-top" aria-label="Back to top" onclick={back_to_top}>{"↑"}</button>
            </div>
        </footer>
    }
}
