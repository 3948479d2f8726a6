use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::company::BRAND;
use crate::content::SERVICES;
use crate::Route;

/// Whether `route` should be highlighted while `current` is shown.
/// Home only matches itself; every other section also matches its children.
pub fn is_active(route: &Route, current: Option<&Route>) -> bool {
    let Some(current) = current else {
        return false;
    };
    match route {
        Route::Home => matches!(current, Route::Home),
        Route::Services => matches!(current, Route::Services | Route::ServiceDetail { .. }),
        other => other == current,
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let services_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let current = use_route::<Route>();
    let is_scrolled = scroll_y > config::HEADER_SCROLL_THRESHOLD;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        let services_open = services_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            services_open.set(false);
        })
    };

    let open_services = {
        let services_open = services_open.clone();
        Callback::from(move |_: MouseEvent| services_open.set(true))
    };
    let close_services = {
        let services_open = services_open.clone();
        Callback::from(move |_: MouseEvent| services_open.set(false))
    };
    let toggle_services = {
        let services_open = services_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            services_open.set(!*services_open);
        })
    };

    let nav_link = |route: Route, label: &'static str| {
        let active = is_active(&route, current.as_ref());
        html! {
            <li onclick={close_menu.clone()}>
                <Link<Route> to={route} classes={classes!("nav-link", active.then_some("active"))}>
                    {label}
                </Link<Route>>
            </li>
        }
    };

    let menu_class = classes!("nav-links", (*menu_open).then_some("mobile-menu-open"));

    html! {
        <header class={classes!("site-header", is_scrolled.then_some("scrolled"))}>
            <nav class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="logo-mark">{"W"}</span>
                    <span class="logo-text">{BRAND}</span>
                </Link<Route>>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <ul class={menu_class}>
                    {nav_link(Route::Home, "Home")}
                    <li
                        class={classes!("has-dropdown", (*services_open).then_some("open"))}
                        onmouseenter={open_services}
                        onmouseleave={close_services}
                    >
                        <div class="dropdown-trigger">
                            <span onclick={close_menu.clone()}>
                                <Link<Route>
                                    to={Route::Services}
                                    classes={classes!("nav-link", is_active(&Route::Services, current.as_ref()).then_some("active"))}
                                >
                                    {"Services"}
                                </Link<Route>>
                            </span>
                            <button class="dropdown-toggle" aria-label="Show services" onclick={toggle_services}>{"▾"}</button>
                        </div>
                        <ul class="dropdown-menu">
                            { for SERVICES.iter().map(|service| html! {
                                <li onclick={close_menu.clone()}>
                                    <Link<Route>
                                        to={Route::ServiceDetail { slug: service.slug.to_string() }}
                                        classes="dropdown-link"
                                    >
                                        {service.title}
                                    </Link<Route>>
                                </li>
                            }) }
                        </ul>
                    </li>
                    {nav_link(Route::About, "About")}
                    {nav_link(Route::Contact, "Contact")}
                    <li onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-cta btn-primary">
                            {"Hire Me"}
                        </Link<Route>>
                    </li>
                </ul>
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(slug: &str) -> Route {
        Route::ServiceDetail { slug: slug.to_string() }
    }

    #[test]
    fn home_is_only_active_on_home() {
        assert!(is_active(&Route::Home, Some(&Route::Home)));
        assert!(!is_active(&Route::Home, Some(&Route::About)));
        assert!(!is_active(&Route::Home, Some(&detail("seo"))));
    }

    #[test]
    fn services_stays_active_on_detail_pages() {
        assert!(is_active(&Route::Services, Some(&Route::Services)));
        assert!(is_active(&Route::Services, Some(&detail("resume-writing"))));
        assert!(!is_active(&Route::Services, Some(&Route::Contact)));
    }

    #[test]
    fn nothing_is_active_without_a_route() {
        assert!(!is_active(&Route::Home, None));
        assert!(!is_active(&Route::Contact, None));
    }

    #[test]
    fn other_links_match_exactly() {
        assert!(is_active(&Route::About, Some(&Route::About)));
        assert!(!is_active(&Route::About, Some(&Route::Mission)));
    }
}
