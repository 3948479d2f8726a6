use std::rc::Rc;

use log::error;
use thiserror::Error;
use yew::Reducible;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("a carousel needs at least one item")]
    Empty,
    #[error("auto-advance interval must be greater than zero")]
    ZeroInterval,
    #[error("index {index} is out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    Running,
    Paused,
}

/// One-item-at-a-time rotation over a fixed, non-empty list.
///
/// Time is fed in through `advance_time`, which makes the controller
/// independent of any real clock. Every manual navigation, pause and resume
/// restarts the countdown to the next automatic step and bumps `timer_epoch`,
/// which views use to recreate their interval timer.
///
/// Hover and focus are tracked as separate holds; the carousel stays paused
/// while either one is active.
#[derive(Debug, PartialEq)]
pub struct Carousel<T> {
    items: Rc<[T]>,
    current: usize,
    playback: Playback,
    interval_ms: u64,
    elapsed_ms: u64,
    epoch: u64,
    hovered: bool,
    focused: bool,
}

impl<T> Clone for Carousel<T> {
    fn clone(&self) -> Self {
        Carousel {
            items: Rc::clone(&self.items),
            current: self.current,
            playback: self.playback,
            interval_ms: self.interval_ms,
            elapsed_ms: self.elapsed_ms,
            epoch: self.epoch,
            hovered: self.hovered,
            focused: self.focused,
        }
    }
}

impl<T> Carousel<T> {
    pub fn new(items: impl Into<Rc<[T]>>, interval_ms: u64) -> Result<Self, CarouselError> {
        let items = items.into();
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }
        if interval_ms == 0 {
            return Err(CarouselError::ZeroInterval);
        }
        Ok(Carousel {
            items,
            current: 0,
            playback: Playback::Running,
            interval_ms,
            elapsed_ms: 0,
            epoch: 0,
            hovered: false,
            focused: false,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &T {
        &self.items[self.current]
    }

    #[cfg(test)]
    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn is_paused(&self) -> bool {
        self.playback == Playback::Paused
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn timer_epoch(&self) -> u64 {
        self.epoch
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.len();
        self.restart_timer();
    }

    pub fn prev(&mut self) {
        self.current = (self.current + self.len() - 1) % self.len();
        self.restart_timer();
    }

    pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len() {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.len(),
            });
        }
        self.current = index;
        self.restart_timer();
        Ok(())
    }

    pub fn pause(&mut self) {
        if self.playback == Playback::Running {
            self.playback = Playback::Paused;
            self.restart_timer();
        }
    }

    pub fn resume(&mut self) {
        if self.playback == Playback::Paused {
            self.playback = Playback::Running;
            self.restart_timer();
        }
    }

    /// Pointer entered (`true`) or left (`false`) the carousel.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
        self.sync_hold();
    }

    /// Keyboard focus is (`true`) or is no longer (`false`) inside the carousel.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.sync_hold();
    }

    fn sync_hold(&mut self) {
        if self.hovered || self.focused {
            self.pause();
        } else {
            self.resume();
        }
    }

    /// Lets `ms` of wall time pass. Returns how many automatic steps were taken.
    pub fn advance_time(&mut self, ms: u64) -> usize {
        if self.is_paused() {
            return 0;
        }
        self.elapsed_ms += ms;
        let steps = self.elapsed_ms / self.interval_ms;
        self.elapsed_ms %= self.interval_ms;
        self.current = ((self.current as u64 + steps) % self.len() as u64) as usize;
        steps as usize
    }

    fn restart_timer(&mut self) {
        self.elapsed_ms = 0;
        self.epoch = self.epoch.wrapping_add(1);
    }
}

pub enum CarouselAction {
    Elapsed(u64),
    Next,
    Prev,
    JumpTo(usize),
    Hover(bool),
    Focus(bool),
}

impl<T> Reducible for Carousel<T> {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Elapsed(ms) => {
                if next.is_paused() {
                    return self;
                }
                next.advance_time(ms);
            }
            CarouselAction::Next => next.next(),
            CarouselAction::Prev => next.prev(),
            CarouselAction::JumpTo(index) => {
                let result = next.jump_to(index);
                if let Err(err) = &result {
                    error!("carousel navigation rejected: {}", err);
                }
                debug_assert!(result.is_ok(), "carousel jump outside its items");
                if result.is_err() {
                    return self;
                }
            }
            CarouselAction::Hover(hovered) => next.set_hovered(hovered),
            CarouselAction::Focus(focused) => next.set_focused(focused),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testimonials() -> Carousel<&'static str> {
        Carousel::new(vec!["sarah", "james", "emily", "michael", "amanda"], 5000)
            .expect("non-empty carousel")
    }

    #[test]
    fn rejects_empty_items_and_zero_interval() {
        let empty: Vec<u8> = Vec::new();
        assert_eq!(Carousel::new(empty, 5000).unwrap_err(), CarouselError::Empty);
        assert_eq!(Carousel::new(vec![1], 0).unwrap_err(), CarouselError::ZeroInterval);
    }

    #[test]
    fn starts_running_at_first_item() {
        let carousel = testimonials();
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(*carousel.current(), "sarah");
        assert_eq!(carousel.playback(), Playback::Running);
    }

    #[test]
    fn next_wraps_around_after_full_cycle() {
        let mut carousel = testimonials();
        carousel.jump_to(3).expect("valid index");

        for _ in 0..carousel.len() {
            carousel.next();
        }
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn prev_and_next_cancel_out() {
        for start in 0..5 {
            let mut carousel = testimonials();
            carousel.jump_to(start).expect("valid index");

            carousel.prev();
            carousel.next();
            assert_eq!(carousel.current_index(), start);

            carousel.next();
            carousel.prev();
            assert_eq!(carousel.current_index(), start);
        }
    }

    #[test]
    fn prev_from_first_goes_to_last() {
        let mut carousel = testimonials();
        carousel.prev();
        assert_eq!(carousel.current_index(), 4);
    }

    #[test]
    fn jump_out_of_range_leaves_index_alone() {
        let mut carousel = testimonials();
        carousel.next();

        let err = carousel.jump_to(5).unwrap_err();
        assert_eq!(err, CarouselError::OutOfRange { index: 5, len: 5 });
        assert_eq!(carousel.current_index(), 1);
        assert!(carousel.jump_to(usize::MAX).is_err());
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn auto_advances_on_interval() {
        let mut carousel = testimonials();
        assert_eq!(carousel.advance_time(12_000), 2);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn partial_intervals_accumulate() {
        let mut carousel = testimonials();
        carousel.advance_time(3_000);
        assert_eq!(carousel.current_index(), 0);
        carousel.advance_time(2_000);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn paused_carousel_ignores_time() {
        let mut carousel = testimonials();
        carousel.pause();
        assert!(carousel.is_paused());
        assert_eq!(carousel.advance_time(60_000), 0);
        assert_eq!(carousel.current_index(), 0);

        carousel.jump_to(3).expect("valid index");
        carousel.resume();
        carousel.advance_time(5_000);
        assert_eq!(carousel.current_index(), 4);
    }

    #[test]
    fn manual_navigation_restarts_countdown() {
        let mut carousel = testimonials();
        let epoch = carousel.timer_epoch();

        carousel.advance_time(4_900);
        carousel.next();
        assert_eq!(carousel.current_index(), 1);
        assert!(carousel.timer_epoch() > epoch);

        carousel.advance_time(200);
        assert_eq!(carousel.current_index(), 1, "tick right after a manual step is suppressed");
        carousel.advance_time(4_800);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn pause_and_resume_are_idempotent() {
        let mut carousel = testimonials();
        carousel.pause();
        let epoch = carousel.timer_epoch();
        carousel.pause();
        assert_eq!(carousel.timer_epoch(), epoch);

        carousel.resume();
        carousel.resume();
        assert_eq!(carousel.timer_epoch(), epoch + 1);
        assert_eq!(carousel.playback(), Playback::Running);
    }

    #[test]
    fn reducer_applies_actions() {
        let carousel = Rc::new(testimonials());

        let carousel = carousel.reduce(CarouselAction::Next);
        let carousel = carousel.reduce(CarouselAction::Elapsed(5_000));
        assert_eq!(carousel.current_index(), 2);

        let carousel = carousel.reduce(CarouselAction::Hover(true));
        let carousel = carousel.reduce(CarouselAction::Elapsed(5_000));
        assert_eq!(carousel.current_index(), 2);

        let carousel = carousel.reduce(CarouselAction::Prev);
        let carousel = carousel.reduce(CarouselAction::Hover(false));
        assert_eq!(carousel.current_index(), 1);
        assert!(!carousel.is_paused());
    }

    #[test]
    fn reducer_ignores_ticks_while_paused() {
        let carousel = Rc::new(testimonials()).reduce(CarouselAction::Focus(true));
        let after = Rc::clone(&carousel).reduce(CarouselAction::Elapsed(5_000));
        assert!(Rc::ptr_eq(&carousel, &after));
    }

    #[test]
    fn reducer_accumulates_partial_ticks() {
        let carousel = Rc::new(testimonials());
        let carousel = carousel.reduce(CarouselAction::Elapsed(2_500));
        let carousel = carousel.reduce(CarouselAction::Elapsed(2_500));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn leaving_with_the_pointer_keeps_focus_hold() {
        let mut carousel = testimonials();
        carousel.set_hovered(true);
        carousel.set_focused(true);

        carousel.set_hovered(false);
        assert!(carousel.is_paused(), "a focused dot still holds the carousel");
        assert_eq!(carousel.advance_time(10_000), 0);

        carousel.set_focused(false);
        assert!(!carousel.is_paused());
        carousel.advance_time(5_000);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn tabbing_out_keeps_hover_hold() {
        let mut carousel = testimonials();
        carousel.set_focused(true);
        carousel.set_hovered(true);

        carousel.set_focused(false);
        assert!(carousel.is_paused(), "the pointer is still over the carousel");

        carousel.set_hovered(false);
        assert_eq!(carousel.playback(), Playback::Running);
    }

    #[test]
    fn overlapping_holds_restart_timer_once_each_way() {
        let carousel = Rc::new(testimonials());
        let start = carousel.timer_epoch();

        let carousel = carousel.reduce(CarouselAction::Hover(true));
        let carousel = carousel.reduce(CarouselAction::Focus(true));
        assert_eq!(carousel.timer_epoch(), start + 1);

        let carousel = carousel.reduce(CarouselAction::Hover(false));
        let carousel = carousel.reduce(CarouselAction::Focus(false));
        assert_eq!(carousel.timer_epoch(), start + 2);
        assert!(!carousel.is_paused());
    }
}
