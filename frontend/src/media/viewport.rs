use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Lookahead margin around the viewport, in CSS margin syntax.
///
/// A region counts as visible once it overlaps the viewport grown by this
/// margin, so media starts loading slightly before it is scrolled into view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootMargin(String);

impl RootMargin {
    pub fn px(pixels: u32) -> Self {
        RootMargin(format!("{}px", pixels))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        RootMargin::px(crate::config::LAZY_ROOT_MARGIN_PX)
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Something that can tell us when a region of the page becomes visible.
///
/// `observe` registers `on_visible` for `region`; `unobserve` drops the
/// registration. Implementations may call `on_visible` more than once if the
/// region keeps intersecting, callers that want fire-once semantics
/// unobserve on the first call.
pub trait ViewportWatcher {
    type Region;

    fn observe(&self, region: &Self::Region, margin: &RootMargin, on_visible: Box<dyn Fn()>);

    fn unobserve(&self, region: &Self::Region);
}

struct ActiveObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

/// `ViewportWatcher` backed by the browser's `IntersectionObserver`.
///
/// Each watcher owns at most one observer, created on `observe`. The observer
/// disconnects itself on the first intersecting entry.
#[derive(Default)]
pub struct IntersectionWatcher {
    active: RefCell<Option<ActiveObserver>>,
    fallback_cancelled: RefCell<Option<Rc<Cell<bool>>>>,
}

impl ViewportWatcher for IntersectionWatcher {
    type Region = Element;

    fn observe(&self, region: &Element, margin: &RootMargin, on_visible: Box<dyn Fn()>) {
        self.unobserve(region);

        let on_visible: Rc<dyn Fn()> = Rc::from(on_visible);
        let fire = on_visible.clone();
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|entry| entry.is_intersecting())
                    .unwrap_or(false)
            });
            if intersecting {
                observer.disconnect();
                fire();
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(margin.as_str());

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(region);
                *self.active.borrow_mut() = Some(ActiveObserver {
                    observer,
                    _callback: callback,
                });
            }
            Err(err) => {
                // No observer support: treat the region as visible on the next tick.
                warn!("IntersectionObserver unavailable, loading eagerly: {:?}", err);
                let cancelled = Rc::new(Cell::new(false));
                let flag = cancelled.clone();
                Timeout::new(0, move || {
                    if !flag.get() {
                        on_visible();
                    }
                })
                .forget();
                *self.fallback_cancelled.borrow_mut() = Some(cancelled);
            }
        }
    }

    fn unobserve(&self, region: &Element) {
        if let Some(active) = self.active.borrow_mut().take() {
            active.observer.unobserve(region);
            active.observer.disconnect();
        }
        if let Some(cancelled) = self.fallback_cancelled.borrow_mut().take() {
            cancelled.set(true);
        }
    }
}

/// Asks the browser to start fetching `source` ahead of rendering it.
pub fn preload(source: &str) {
    match web_sys::HtmlImageElement::new() {
        Ok(image) => image.set_src(source),
        Err(err) => warn!("could not preload {}: {:?}", source, err),
    }
}
