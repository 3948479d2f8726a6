use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageTransitionProps {
    #[prop_or_default]
    pub children: Children,
}

/// Fades a page in and scrolls back to the top when it mounts.
#[function_component(PageTransition)]
pub fn page_transition(props: &PageTransitionProps) -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <main class="page page-enter">
            { for props.children.iter() }
        </main>
    }
}
