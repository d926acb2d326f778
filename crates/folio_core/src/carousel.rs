//! Testimonials carousel

use std::time::Duration;

use crate::content::{Testimonial, TESTIMONIALS};

/// Time between automatic advances
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);

/// Index, autoplay flag and timer for a list of slides
#[derive(Clone, Debug)]
pub struct Carousel<T: 'static = Testimonial> {
    slides: &'static [T],
    index: usize,
    autoplay: bool,
    interval: Duration,
    elapsed: Duration,
}

impl Default for Carousel<Testimonial> {
    fn default() -> Self {
        Self::new(TESTIMONIALS)
    }
}

impl<T: 'static> Carousel<T> {
    /// Start at the first slide with autoplay on
    pub fn new(slides: &'static [T]) -> Self {
        Self {
            slides,
            index: 0,
            autoplay: true,
            interval: AUTOPLAY_INTERVAL,
            elapsed: Duration::ZERO,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn next(&mut self) {
        if !self.slides.is_empty() {
            self.index = (self.index + 1) % self.slides.len();
        }
        self.elapsed = Duration::ZERO;
    }

    pub fn prev(&mut self) {
        if !self.slides.is_empty() {
            self.index = (self.index + self.slides.len() - 1) % self.slides.len();
        }
        self.elapsed = Duration::ZERO;
    }

    /// Jump to a slide (dot navigation); out-of-range indices are ignored
    pub fn go_to(&mut self, index: usize) {
        if index < self.slides.len() {
            self.index = index;
            self.elapsed = Duration::ZERO;
        }
    }

    /// Advance the autoplay timer
    ///
    /// Returns how many slides were advanced.
    pub fn tick(&mut self, dt: Duration) -> usize {
        if !self.autoplay || self.slides.is_empty() || self.interval.is_zero() {
            return 0;
        }
        self.elapsed += dt;
        let mut advanced = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            self.index = (self.index + 1) % self.slides.len();
            advanced += 1;
        }
        advanced
    }

    pub fn toggle_autoplay(&mut self) -> bool {
        self.autoplay = !self.autoplay;
        self.elapsed = Duration::ZERO;
        self.autoplay
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&'static T> {
        self.slides.get(self.index)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        let mut c: Carousel = Carousel::default();
        for _ in 0..5 {
            c.next();
        }
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_prev_wraps() {
        let mut c: Carousel = Carousel::default();
        c.prev();
        assert_eq!(c.index(), 4);
        assert_eq!(c.current().unwrap().name, "Lisa Chen");
    }

    #[test]
    fn test_autoplay_advances_every_interval() {
        let mut c: Carousel = Carousel::default();
        assert_eq!(c.tick(Duration::from_millis(4999)), 0);
        assert_eq!(c.tick(Duration::from_millis(1)), 1);
        assert_eq!(c.index(), 1);
        assert_eq!(c.tick(Duration::from_secs(10)), 2);
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn test_paused_does_not_advance() {
        let mut c: Carousel = Carousel::default();
        assert!(!c.toggle_autoplay());
        assert_eq!(c.tick(Duration::from_secs(60)), 0);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_manual_navigation_resets_timer() {
        let mut c: Carousel = Carousel::default();
        c.tick(Duration::from_millis(4000));
        c.next();
        assert_eq!(c.tick(Duration::from_millis(4000)), 0);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_go_to_ignores_out_of_range() {
        let mut c: Carousel = Carousel::default();
        c.go_to(3);
        assert_eq!(c.index(), 3);
        c.go_to(10);
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn test_empty_carousel() {
        static NONE: [u8; 0] = [];
        let mut c = Carousel::new(&NONE);
        c.next();
        c.prev();
        assert_eq!(c.tick(Duration::from_secs(10)), 0);
        assert!(c.current().is_none());
    }
}
