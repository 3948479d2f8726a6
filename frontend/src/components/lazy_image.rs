use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::media::{preload, IntersectionWatcher, MediaLoadState, MediaLoader, MediaStatus, RootMargin};

type Loader = Rc<RefCell<Option<MediaLoader<IntersectionWatcher>>>>;

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub container_class: Classes,
    #[prop_or_default]
    pub priority: bool,
    #[prop_or_default]
    pub blur_data_url: Option<AttrValue>,
    #[prop_or_default]
    pub root_margin: RootMargin,
}

/// Image that is only fetched once it comes near the viewport.
///
/// A skeleton is shown while the image is pending, the image fades in once
/// loaded, and a failed load leaves an explicit fallback instead of a broken
/// image.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let container = use_node_ref();
    let snapshot = use_state(|| MediaLoadState::new(props.src.to_string(), props.priority));
    let loader: Loader = use_mut_ref(|| None);

    {
        let container = container.clone();
        let snapshot = snapshot.clone();
        let loader = loader.clone();
        use_effect_with_deps(
            move |(src, priority, margin): &(AttrValue, bool, RootMargin)| {
                snapshot.set(MediaLoadState::new(src.to_string(), *priority));
                if *priority {
                    preload(src);
                }

                match container.cast::<Element>() {
                    Some(region) => {
                        let on_change = {
                            let snapshot = snapshot.clone();
                            move |state: &MediaLoadState| snapshot.set(state.clone())
                        };
                        *loader.borrow_mut() = Some(MediaLoader::new(
                            src.to_string(),
                            *priority,
                            margin,
                            IntersectionWatcher::default(),
                            region,
                            on_change,
                        ));
                    }
                    None => warn!("lazy image container for {} was not mounted", src),
                }

                move || {
                    if let Some(loader) = loader.borrow_mut().take() {
                        loader.teardown();
                    }
                }
            },
            (props.src.clone(), props.priority, props.root_margin.clone()),
        );
    }

    let onload = {
        let loader = loader.clone();
        Callback::from(move |_: Event| {
            if let Some(loader) = loader.borrow().as_ref() {
                loader.on_load_success();
            }
        })
    };

    let onerror = {
        let loader = loader.clone();
        Callback::from(move |_: Event| {
            if let Some(loader) = loader.borrow().as_ref() {
                loader.on_load_failure();
            }
        })
    };

    let skeleton_style = props.blur_data_url.as_ref().map(|url| {
        format!(
            "background-image: url({}); background-size: cover; filter: blur(10px); transform: scale(1.1);",
            url
        )
    });

    let loaded = snapshot.status == MediaStatus::Loaded;

    html! {
        <div ref={container} class={classes!("lazy-image", props.container_class.clone())}>
            if snapshot.shows_placeholder() {
                <div class="lazy-skeleton" style={skeleton_style}></div>
            }
            if snapshot.status == MediaStatus::Errored {
                <div class="lazy-fallback" role="img" aria-label={props.alt.clone()}>
                    <span>{"Image unavailable"}</span>
                </div>
            } else if snapshot.should_fetch() {
                <img
                    src={props.src.clone()}
                    alt={props.alt.clone()}
                    loading={if props.priority { "eager" } else { "lazy" }}
                    decoding="async"
                    class={classes!("lazy-media", props.class.clone(), loaded.then_some("is-loaded"))}
                    {onload}
                    {onerror}
                />
            }
        </div>
    }
}
