use web_sys::Element;
use yew::prelude::*;

use crate::media::{IntersectionWatcher, RootMargin, ViewportWatcher};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Stagger, in milliseconds, before the entrance animation starts.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or(RevealFrom::Below)]
    pub from: RevealFrom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealFrom {
    Below,
    Left,
    Right,
}

/// Plays a one-time entrance animation when its content scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let watcher = IntersectionWatcher::default();
                let region = node.cast::<Element>();
                match &region {
                    Some(region) => {
                        let revealed = revealed.clone();
                        watcher.observe(region, &RootMargin::px(0), Box::new(move || revealed.set(true)));
                    }
                    None => revealed.set(true),
                }
                move || {
                    if let Some(region) = region {
                        watcher.unobserve(&region);
                    }
                }
            },
            (),
        );
    }

    let direction = match props.from {
        RevealFrom::Below => "reveal-below",
        RevealFrom::Left => "reveal-left",
        RevealFrom::Right => "reveal-right",
    };
    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node}
            class={classes!("reveal", direction, (*revealed).then_some("revealed"), props.class.clone())}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}
