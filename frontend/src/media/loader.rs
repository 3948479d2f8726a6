use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, warn};

use super::viewport::{RootMargin, ViewportWatcher};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaStatus {
    Pending,
    Loaded,
    Errored,
}

/// Loading lifecycle of a single piece of deferred media.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaLoadState {
    pub source: String,
    pub is_priority: bool,
    pub is_visible: bool,
    pub status: MediaStatus,
}

impl MediaLoadState {
    pub fn new(source: impl Into<String>, is_priority: bool) -> Self {
        MediaLoadState {
            source: source.into(),
            is_priority,
            is_visible: false,
            status: MediaStatus::Pending,
        }
    }

    /// Whether the media element should exist and be fetching.
    pub fn should_fetch(&self) -> bool {
        self.is_priority || self.is_visible
    }

    pub fn shows_placeholder(&self) -> bool {
        self.status == MediaStatus::Pending
    }

    /// Returns true if the state changed.
    fn mark_visible(&mut self) -> bool {
        if self.is_visible || self.status != MediaStatus::Pending {
            return false;
        }
        self.is_visible = true;
        true
    }

    /// Settles a pending load. Outcomes reported before the media could have
    /// been fetched are stale and ignored.
    fn settle(&mut self, outcome: MediaStatus) -> bool {
        if self.status != MediaStatus::Pending || !self.should_fetch() {
            return false;
        }
        self.status = outcome;
        true
    }
}

struct Observation<W: ViewportWatcher> {
    watcher: W,
    region: W::Region,
}

struct Shared<W: ViewportWatcher> {
    state: RefCell<MediaLoadState>,
    observation: RefCell<Option<Observation<W>>>,
    disposed: Cell<bool>,
    on_change: Box<dyn Fn(&MediaLoadState)>,
}

/// Drives a `MediaLoadState` from viewport and load events.
///
/// Non-priority media registers a fire-once observation on construction; the
/// observation is cancelled on first intersection, when the load settles or
/// on `teardown`, whichever comes first. After `teardown` every event is a
/// no-op, so late callbacks from an unmounted view cannot touch the state.
pub struct MediaLoader<W: ViewportWatcher> {
    shared: Rc<Shared<W>>,
}

impl<W> MediaLoader<W>
where
    W: ViewportWatcher + 'static,
    W::Region: 'static,
{
    pub fn new(
        source: impl Into<String>,
        is_priority: bool,
        root_margin: &RootMargin,
        watcher: W,
        region: W::Region,
        on_change: impl Fn(&MediaLoadState) + 'static,
    ) -> Self {
        let shared = Rc::new(Shared {
            state: RefCell::new(MediaLoadState::new(source, is_priority)),
            observation: RefCell::new(None),
            disposed: Cell::new(false),
            on_change: Box::new(on_change),
        });

        if !is_priority {
            let weak: Weak<Shared<W>> = Rc::downgrade(&shared);
            watcher.observe(
                &region,
                root_margin,
                Box::new(move || {
                    if let Some(shared) = weak.upgrade() {
                        MediaLoader { shared }.on_intersect();
                    }
                }),
            );
            *shared.observation.borrow_mut() = Some(Observation { watcher, region });
        }

        MediaLoader { shared }
    }

    pub fn state(&self) -> MediaLoadState {
        self.shared.state.borrow().clone()
    }

    #[cfg(test)]
    pub fn status(&self) -> MediaStatus {
        self.shared.state.borrow().status
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.shared.state.borrow().is_visible
    }

    #[cfg(test)]
    pub fn is_observing(&self) -> bool {
        self.shared.observation.borrow().is_some()
    }

    pub fn on_intersect(&self) {
        if self.shared.disposed.get() {
            return;
        }
        let changed = self.shared.state.borrow_mut().mark_visible();
        self.cancel_observation();
        if changed {
            self.notify();
        }
    }

    pub fn on_load_success(&self) {
        self.settle(MediaStatus::Loaded);
    }

    pub fn on_load_failure(&self) {
        if self.settle(MediaStatus::Errored) {
            warn!("failed to load media {}", self.shared.state.borrow().source);
        }
    }

    /// Cancels any pending observation and ignores all later events.
    pub fn teardown(&self) {
        if !self.shared.disposed.replace(true) {
            debug!("tearing down media loader for {}", self.shared.state.borrow().source);
        }
        self.cancel_observation();
    }

    fn settle(&self, outcome: MediaStatus) -> bool {
        if self.shared.disposed.get() {
            return false;
        }
        let changed = self.shared.state.borrow_mut().settle(outcome);
        if changed {
            self.cancel_observation();
            self.notify();
        }
        changed
    }

    fn cancel_observation(&self) {
        let observation = self.shared.observation.borrow_mut().take();
        if let Some(Observation { watcher, region }) = observation {
            watcher.unobserve(&region);
        }
    }

    fn notify(&self) {
        let snapshot = self.state();
        (self.shared.on_change)(&snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeViewport {
        callbacks: RefCell<HashMap<u32, Rc<dyn Fn()>>>,
        observed: Cell<usize>,
        unobserved: Cell<usize>,
    }

    /// Cloneable handle so the test keeps access after the loader takes the watcher.
    #[derive(Clone, Default)]
    struct FakeWatcher(Rc<FakeViewport>);

    impl FakeWatcher {
        fn active(&self) -> usize {
            self.0.callbacks.borrow().len()
        }

        fn callback(&self, region: u32) -> Option<Rc<dyn Fn()>> {
            self.0.callbacks.borrow().get(&region).cloned()
        }

        fn scroll_into_view(&self, region: u32) {
            if let Some(callback) = self.callback(region) {
                callback();
            }
        }
    }

    impl ViewportWatcher for FakeWatcher {
        type Region = u32;

        fn observe(&self, region: &u32, _margin: &RootMargin, on_visible: Box<dyn Fn()>) {
            self.0.observed.set(self.0.observed.get() + 1);
            self.0.callbacks.borrow_mut().insert(*region, Rc::from(on_visible));
        }

        fn unobserve(&self, region: &u32) {
            if self.0.callbacks.borrow_mut().remove(region).is_some() {
                self.0.unobserved.set(self.0.unobserved.get() + 1);
            }
        }
    }

    fn lazy(watcher: &FakeWatcher, region: u32) -> MediaLoader<FakeWatcher> {
        MediaLoader::new("a.png", false, &RootMargin::default(), watcher.clone(), region, |_| {})
    }

    #[test]
    fn lazy_media_stays_pending_until_it_intersects() {
        let watcher = FakeWatcher::default();
        let loader = lazy(&watcher, 1);

        assert_eq!(loader.status(), MediaStatus::Pending);
        assert!(!loader.is_visible());
        assert_eq!(watcher.active(), 1);

        loader.on_load_success();
        assert_eq!(loader.status(), MediaStatus::Pending, "load before visibility is stale");

        watcher.scroll_into_view(1);
        assert!(loader.is_visible());
        assert_eq!(loader.status(), MediaStatus::Pending);

        loader.on_load_success();
        assert_eq!(loader.status(), MediaStatus::Loaded);
    }

    #[test]
    fn intersection_is_fire_once() {
        let watcher = FakeWatcher::default();
        let changes = Rc::new(Cell::new(0));
        let counter = changes.clone();
        let loader = MediaLoader::new(
            "a.png",
            false,
            &RootMargin::px(200),
            watcher.clone(),
            7,
            move |_| counter.set(counter.get() + 1),
        );

        let callback = watcher.callback(7).expect("observation registered");
        callback();
        assert_eq!(watcher.active(), 0, "observation dropped after first intersection");
        assert!(!loader.is_observing());

        callback();
        loader.on_intersect();
        assert!(loader.is_visible());
        assert_eq!(changes.get(), 1);
    }

    #[test]
    fn priority_media_skips_observation() {
        let watcher = FakeWatcher::default();
        let loader = MediaLoader::new("hero.png", true, &RootMargin::default(), watcher.clone(), 1, |_| {});

        assert_eq!(watcher.0.observed.get(), 0);
        assert!(loader.state().should_fetch());

        loader.on_load_success();
        assert_eq!(loader.status(), MediaStatus::Loaded);
        assert!(!loader.is_visible());
    }

    #[test]
    fn failure_after_intersection_is_terminal() {
        let watcher = FakeWatcher::default();
        let loader = lazy(&watcher, 3);

        loader.on_intersect();
        loader.on_load_failure();

        let state = loader.state();
        assert_eq!(state.status, MediaStatus::Errored);
        assert!(state.is_visible);
        assert_eq!(state.source, "a.png");

        loader.on_load_success();
        assert_eq!(loader.status(), MediaStatus::Errored);
    }

    #[test]
    fn late_callbacks_after_teardown_are_ignored() {
        let watcher = FakeWatcher::default();
        let changes = Rc::new(Cell::new(0));
        let counter = changes.clone();
        let loader = MediaLoader::new(
            "a.png",
            false,
            &RootMargin::default(),
            watcher.clone(),
            4,
            move |_| counter.set(counter.get() + 1),
        );
        let late = watcher.callback(4).expect("observation registered");

        loader.teardown();
        assert_eq!(watcher.active(), 0);

        late();
        loader.on_intersect();
        loader.on_load_success();

        assert_eq!(loader.state(), MediaLoadState::new("a.png", false));
        assert_eq!(changes.get(), 0);
    }

    #[test]
    fn teardown_is_idempotent() {
        let watcher = FakeWatcher::default();
        let loader = lazy(&watcher, 5);

        loader.teardown();
        loader.teardown();

        assert_eq!(watcher.0.unobserved.get(), 1);

        let settled = MediaLoader::new("b.png", true, &RootMargin::default(), watcher.clone(), 6, |_| {});
        settled.teardown();
        assert_eq!(watcher.0.unobserved.get(), 1);
    }

    #[test]
    fn settling_cancels_pending_observation() {
        let watcher = FakeWatcher::default();
        let loader = lazy(&watcher, 8);

        loader.on_intersect();
        loader.on_load_success();
        assert!(!loader.is_observing());
        assert_eq!(watcher.active(), 0);
    }

    #[test]
    fn mount_unmount_cycles_leave_no_observers() {
        let watcher = FakeWatcher::default();

        for region in 0..50 {
            let loader = lazy(&watcher, region);
            if region % 3 == 0 {
                watcher.scroll_into_view(region);
            }
            loader.teardown();
        }

        assert_eq!(watcher.active(), 0);
        assert_eq!(watcher.0.observed.get(), 50);
        assert_eq!(watcher.0.unobserved.get(), 50);
    }

    #[test]
    fn dropped_loader_callback_is_harmless() {
        let watcher = FakeWatcher::default();
        let loader = lazy(&watcher, 9);
        let late = watcher.callback(9).expect("observation registered");

        drop(loader);
        late();
    }
}
