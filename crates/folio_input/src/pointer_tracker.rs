//! Cursor tracking and the pointer ring affordance
//!
//! - Cursor move: record position, show the ring, forward to the layer
//! - Cursor leave: hide the ring
//!
//! The ring pings outward while shown: it grows to twice its radius and fades
//! out once per period.

use std::f32::consts::TAU;

use folio_math::{Rgba, Vec2};
use winit::dpi::PhysicalPosition;
use winit::event::WindowEvent;

/// What the tracker made of a window event
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Cursor moved to a position in surface pixels
    Moved(Vec2),
    /// Cursor left the window
    Left,
}

/// Ring outline to draw this frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    pub center: Vec2,
    pub radius: f32,
    pub width: f32,
    pub color: Rgba,
}

impl Ring {
    /// Approximate the outline with `segments` straight pieces
    pub fn segments(&self, segments: usize) -> Vec<(Vec2, Vec2)> {
        let n = segments.max(3);
        (0..n)
            .map(|i| {
                let a = i as f32 * TAU / n as f32;
                let b = (i + 1) as f32 * TAU / n as f32;
                (
                    Vec2::from_polar(self.center, self.radius, a),
                    Vec2::from_polar(self.center, self.radius, b),
                )
            })
            .collect()
    }
}

/// Tracks the cursor over the window
pub struct PointerTracker {
    position: Option<Vec2>,
    active: bool,
    ping_elapsed: f32,

    // Configuration
    pub ring_radius: f32,
    pub ring_width: f32,
    pub ring_color: Rgba,
    /// Seconds per ping cycle
    pub ping_period: f32,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            position: None,
            active: false,
            ping_elapsed: 0.0,

            ring_radius: 20.0,
            ring_width: 2.0,
            ring_color: Rgba::from_rgb8(0x60, 0xa5, 0xfa), // blue-400
            ping_period: 1.0,
        }
    }

    /// Process a window event
    ///
    /// Returns Some for cursor events, None for everything else.
    pub fn process_event(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(PointerEvent::Moved(self.process_cursor_moved(*position)))
            }
            WindowEvent::CursorLeft { .. } => {
                self.process_cursor_left();
                Some(PointerEvent::Left)
            }
            _ => None,
        }
    }

    /// Record a cursor move; returns the position as a surface point
    pub fn process_cursor_moved(&mut self, position: PhysicalPosition<f64>) -> Vec2 {
        let point = Vec2::new(position.x as f32, position.y as f32);
        if !self.active {
            self.ping_elapsed = 0.0;
            log::trace!("Pointer entered at ({}, {})", point.x, point.y);
        }
        self.position = Some(point);
        self.active = true;
        point
    }

    /// Record the cursor leaving the window
    pub fn process_cursor_left(&mut self) {
        self.active = false;
    }

    /// Advance the ping animation
    pub fn update(&mut self, dt: f32) {
        if self.active && self.ping_period > 0.0 {
            self.ping_elapsed = (self.ping_elapsed + dt) % self.ping_period;
        }
    }

    /// Last cursor position, kept after the cursor leaves
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Whether the ring is shown
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The ring to draw, or None while the cursor is outside
    pub fn ring(&self) -> Option<Ring> {
        if !self.active {
            return None;
        }
        let center = self.position?;
        let phase = if self.ping_period > 0.0 {
            (self.ping_elapsed / self.ping_period).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Some(Ring {
            center,
            radius: self.ring_radius * (1.0 + phase),
            width: self.ring_width,
            color: self.ring_color.with_alpha(1.0 - phase),
        })
    }

    pub fn with_ring_radius(mut self, radius: f32) -> Self {
        self.ring_radius = radius;
        self
    }

    pub fn with_ping_period(mut self, period: f32) -> Self {
        self.ping_period = period;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_until_moved() {
        let tracker = PointerTracker::new();
        assert!(!tracker.is_active());
        assert!(tracker.ring().is_none());
        assert!(tracker.position().is_none());
    }

    #[test]
    fn test_move_activates_ring() {
        let mut tracker = PointerTracker::new();
        let point = tracker.process_cursor_moved(PhysicalPosition::new(120.0, 80.5));

        assert_eq!(point, Vec2::new(120.0, 80.5));
        let ring = tracker.ring().unwrap();
        assert_eq!(ring.center, point);
        assert_eq!(ring.radius, 20.0);
        assert_eq!(ring.color.a, 1.0);
    }

    #[test]
    fn test_leave_hides_ring_keeps_position() {
        let mut tracker = PointerTracker::new();
        tracker.process_cursor_moved(PhysicalPosition::new(10.0, 10.0));
        tracker.process_cursor_left();

        assert!(!tracker.is_active());
        assert!(tracker.ring().is_none());
        assert_eq!(tracker.position(), Some(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn test_ping_grows_and_fades() {
        let mut tracker = PointerTracker::new();
        tracker.process_cursor_moved(PhysicalPosition::new(0.0, 0.0));
        tracker.update(0.5);

        let ring = tracker.ring().unwrap();
        assert!((ring.radius - 30.0).abs() < 0.001);
        assert!((ring.color.a - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_ping_wraps_each_period() {
        let mut tracker = PointerTracker::new().with_ping_period(1.0);
        tracker.process_cursor_moved(PhysicalPosition::new(0.0, 0.0));
        tracker.update(1.25);

        let ring = tracker.ring().unwrap();
        assert!((ring.radius - 25.0).abs() < 0.001);
    }

    #[test]
    fn test_ring_segments_close() {
        let ring = Ring {
            center: Vec2::ZERO,
            radius: 10.0,
            width: 2.0,
            color: Rgba::WHITE,
        };
        let segments = ring.segments(16);
        assert_eq!(segments.len(), 16);
        assert!(segments[15].1.distance(segments[0].0) < 0.001);
        assert!(segments.iter().all(|(a, _)| (a.length() - 10.0).abs() < 0.001));
    }
}
