//! Spotlight carousel state machine.
//!
//! The carousel owns its auto-advance deadline as a plain value
//! ([`Carousel::deadline`] internally) instead of a spawned task: the UI's
//! tick loop calls [`Carousel::tick`] with the current instant, and dropping
//! the carousel drops the timer with it. There is nothing to cancel on
//! teardown and no callback can ever fire against a dead widget.
//!
//! All methods take `now` explicitly so every timing rule is testable
//! without sleeping.

use std::time::{Duration, Instant};

/// Time between automatic slide advances.
pub const DEFAULT_ADVANCE_INTERVAL: Duration = Duration::from_millis(5_000);

/// How long a slide transition is considered in flight, for rendering a
/// directional sweep effect.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(250);

/// Direction of an in-flight slide transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    from: usize,
    direction: Direction,
    until: Instant,
}

/// Read-only snapshot for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselView {
    pub index: usize,
    pub total: usize,
    pub hovered: bool,
    pub paused: bool,
    /// Direction of a transition still in flight, if any.
    pub transition: Option<Direction>,
}

/// Auto-advancing slideshow over a list of `len` slides.
///
/// The timer is only ever armed while advancing is eligible: more than one
/// slide, not hovered, not paused. Every manual navigation clears and
/// re-arms it so at most one advance happens per interval.
#[derive(Debug)]
pub struct Carousel {
    len: usize,
    current: usize,
    hovered: bool,
    paused: bool,
    interval: Duration,
    deadline: Option<Instant>,
    transition: Option<Transition>,
}

impl Carousel {
    #[must_use]
    pub fn new(len: usize, now: Instant) -> Self {
        Self::with_interval(len, DEFAULT_ADVANCE_INTERVAL, now)
    }

    #[must_use]
    pub fn with_interval(len: usize, interval: Duration, now: Instant) -> Self {
        let mut carousel = Self {
            len,
            current: 0,
            hovered: false,
            paused: false,
            interval,
            deadline: None,
            transition: None,
        };
        carousel.rearm(now);
        carousel
    }

    fn eligible(&self) -> bool {
        self.len > 1 && !self.hovered && !self.paused
    }

    /// Clears the timer and, if advancing is eligible, arms it afresh.
    fn rearm(&mut self, now: Instant) {
        self.deadline = if self.eligible() {
            Some(now + self.interval)
        } else {
            None
        };
    }

    fn begin_transition(&mut self, from: usize, direction: Direction, now: Instant) {
        self.transition = Some(Transition {
            from,
            direction,
            until: now + TRANSITION_DURATION,
        });
    }

    /// Advances the state machine. Call on every UI tick; returns `true`
    /// when the timer fired and the slide changed, so the caller knows to
    /// redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self
            .transition
            .is_some_and(|transition| now >= transition.until)
        {
            self.transition = None;
        }
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }
        let from = self.current;
        self.current = (self.current + 1) % self.len;
        self.begin_transition(from, Direction::Forward, now);
        self.rearm(now);
        true
    }

    /// Manual advance. Resets the auto-advance timer so the next automatic
    /// advance is a full interval away.
    pub fn next(&mut self, now: Instant) {
        if self.len == 0 {
            return;
        }
        let from = self.current;
        self.current = (self.current + 1) % self.len;
        self.begin_transition(from, Direction::Forward, now);
        self.rearm(now);
    }

    /// Manual step back. Resets the auto-advance timer.
    pub fn prev(&mut self, now: Instant) {
        if self.len == 0 {
            return;
        }
        let from = self.current;
        self.current = (self.current + self.len - 1) % self.len;
        self.begin_transition(from, Direction::Backward, now);
        self.rearm(now);
    }

    /// Jumps straight to slide `index`. Jumping to the current slide is a
    /// complete no-op: no transition, and the running timer keeps its
    /// original deadline.
    pub fn go_to(&mut self, index: usize, now: Instant) {
        if index >= self.len || index == self.current {
            return;
        }
        let direction = if index > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        let from = self.current;
        self.current = index;
        self.begin_transition(from, direction, now);
        self.rearm(now);
    }

    /// Mouse entered the carousel surface: the timer is cleared outright,
    /// not merely ignored, so resuming always starts a fresh interval.
    pub fn set_hovered(&mut self, hovered: bool, now: Instant) {
        if self.hovered == hovered {
            return;
        }
        self.hovered = hovered;
        self.rearm(now);
    }

    /// Explicit pause, independent of hover.
    pub fn pause(&mut self) {
        self.paused = true;
        self.deadline = None;
    }

    /// Resumes auto-advance with a full interval from `now`.
    pub fn resume(&mut self, now: Instant) {
        self.paused = false;
        self.rearm(now);
    }

    /// The backing list changed size. If the current index fell off the
    /// end, snaps back to the first slide; either way the timer is reset
    /// against the new eligibility.
    pub fn set_len(&mut self, len: usize, now: Instant) {
        self.len = len;
        if self.current >= len {
            self.current = 0;
        }
        self.transition = None;
        self.rearm(now);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Instant the next automatic advance will fire, if one is armed.
    #[must_use]
    pub fn next_advance(&self) -> Option<Instant> {
        self.deadline
    }

    #[must_use]
    pub fn view(&self) -> CarouselView {
        CarouselView {
            index: self.current,
            total: self.len,
            hovered: self.hovered,
            paused: self.paused,
            transition: self.transition.map(|t| t.direction),
        }
    }

    /// Index the in-flight transition is coming from, for sweep rendering.
    #[must_use]
    pub fn transition_from(&self) -> Option<usize> {
        self.transition.map(|t| t.from)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const INTERVAL: Duration = Duration::from_millis(5_000);

    fn carousel(len: usize, now: Instant) -> Carousel {
        Carousel::with_interval(len, INTERVAL, now)
    }

    #[test]
    fn single_slide_never_arms_a_timer() {
        let t0 = Instant::now();
        let mut c = carousel(1, t0);
        assert_eq!(c.next_advance(), None);
        assert!(!c.tick(t0 + INTERVAL * 10));
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn empty_list_is_inert() {
        let t0 = Instant::now();
        let mut c = carousel(0, t0);
        c.next(t0);
        c.prev(t0);
        assert_eq!(c.current(), 0);
        assert_eq!(c.next_advance(), None);
    }

    #[test]
    fn timer_fires_and_wraps() {
        let t0 = Instant::now();
        let mut c = carousel(3, t0);
        assert!(!c.tick(t0 + INTERVAL / 2));
        assert!(c.tick(t0 + INTERVAL));
        assert_eq!(c.current(), 1);
        assert!(c.tick(t0 + INTERVAL * 2));
        assert!(c.tick(t0 + INTERVAL * 3));
        assert_eq!(c.current(), 0); // wrapped
    }

    #[test]
    fn manual_next_resets_the_timer() {
        let t0 = Instant::now();
        let mut c = carousel(3, t0);
        let almost = t0 + INTERVAL - Duration::from_millis(1);
        c.next(almost);
        assert_eq!(c.current(), 1);
        // The old deadline must not produce a double-advance.
        assert!(!c.tick(t0 + INTERVAL));
        assert_eq!(c.current(), 1);
        assert!(c.tick(almost + INTERVAL));
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn prev_wraps_backward() {
        let t0 = Instant::now();
        let mut c = carousel(4, t0);
        c.prev(t0);
        assert_eq!(c.current(), 3);
        assert_eq!(c.view().transition, Some(Direction::Backward));
    }

    #[test]
    fn go_to_current_is_a_complete_noop() {
        let t0 = Instant::now();
        let mut c = carousel(3, t0);
        let deadline = c.next_advance();
        c.go_to(0, t0 + Duration::from_millis(100));
        assert_eq!(c.current(), 0);
        assert_eq!(c.view().transition, None);
        assert_eq!(c.next_advance(), deadline); // timer untouched
    }

    #[test]
    fn go_to_picks_direction_from_relative_position() {
        let t0 = Instant::now();
        let mut c = carousel(5, t0);
        c.go_to(3, t0);
        assert_eq!(c.view().transition, Some(Direction::Forward));
        c.go_to(1, t0);
        assert_eq!(c.view().transition, Some(Direction::Backward));
    }

    #[test]
    fn hover_clears_timer_and_unhover_rearms_from_zero() {
        let t0 = Instant::now();
        let mut c = carousel(3, t0);
        let near = t0 + INTERVAL - Duration::from_millis(1);
        c.set_hovered(true, near);
        assert_eq!(c.next_advance(), None);
        assert!(!c.tick(t0 + INTERVAL * 2));
        assert_eq!(c.current(), 0);

        let resume = t0 + INTERVAL * 3;
        c.set_hovered(false, resume);
        assert_eq!(c.next_advance(), Some(resume + INTERVAL));
    }

    #[test]
    fn pause_and_resume() {
        let t0 = Instant::now();
        let mut c = carousel(3, t0);
        c.pause();
        assert_eq!(c.next_advance(), None);
        let later = t0 + INTERVAL * 4;
        c.resume(later);
        assert_eq!(c.next_advance(), Some(later + INTERVAL));
    }

    #[test]
    fn shrink_below_current_resets_to_first_slide() {
        let t0 = Instant::now();
        let mut c = carousel(4, t0);
        c.go_to(3, t0);
        c.set_len(2, t0);
        assert_eq!(c.current(), 0);
        assert_eq!(c.view().total, 2);
    }

    #[test]
    fn shrink_to_one_disarms() {
        let t0 = Instant::now();
        let mut c = carousel(3, t0);
        c.set_len(1, t0);
        assert_eq!(c.next_advance(), None);
    }

    #[test]
    fn transition_expires_after_duration() {
        let t0 = Instant::now();
        let mut c = carousel(3, t0);
        c.next(t0);
        assert_eq!(c.view().transition, Some(Direction::Forward));
        c.tick(t0 + TRANSITION_DURATION);
        assert_eq!(c.view().transition, None);
    }
}
