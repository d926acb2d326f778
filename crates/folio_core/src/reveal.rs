//! Scroll-triggered reveal
//!
//! Sections animate in the first time they come within the viewport shrunk
//! by a margin on every side. Once revealed an element stays revealed.

/// Default inward margin in pixels
pub const DEFAULT_MARGIN: f32 = 100.0;

#[derive(Clone, Debug, PartialEq)]
struct Tracked {
    id: String,
    top: f32,
    height: f32,
    revealed: bool,
}

/// Tracks which page elements have been revealed
#[derive(Clone, Debug)]
pub struct RevealTracker {
    margin: f32,
    elements: Vec<Tracked>,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(DEFAULT_MARGIN)
    }
}

impl RevealTracker {
    pub fn new(margin: f32) -> Self {
        Self {
            margin,
            elements: Vec::new(),
        }
    }

    /// Register an element by its document offset and height
    ///
    /// Registering an id again updates its geometry without un-revealing it.
    pub fn register(&mut self, id: impl Into<String>, top: f32, height: f32) {
        let id = id.into();
        match self.elements.iter_mut().find(|e| e.id == id) {
            Some(existing) => {
                existing.top = top;
                existing.height = height.max(0.0);
            }
            None => self.elements.push(Tracked {
                id,
                top,
                height: height.max(0.0),
                revealed: false,
            }),
        }
    }

    /// Check visibility at the given scroll offset
    ///
    /// Returns the ids revealed by this call, in registration order.
    pub fn observe(&mut self, scroll_top: f32, viewport_height: f32) -> Vec<String> {
        let window_top = scroll_top + self.margin;
        let window_bottom = scroll_top + viewport_height - self.margin;
        if window_bottom <= window_top {
            return Vec::new();
        }

        let mut newly = Vec::new();
        for element in self.elements.iter_mut().filter(|e| !e.revealed) {
            let bottom = element.top + element.height;
            if element.top < window_bottom && bottom > window_top {
                element.revealed = true;
                newly.push(element.id.clone());
            }
        }
        if !newly.is_empty() {
            log::debug!("Revealed {:?} at scroll {}", newly, scroll_top);
        }
        newly
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.elements.iter().any(|e| e.id == id && e.revealed)
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> RevealTracker {
        let mut t = RevealTracker::default();
        t.register("about", 900.0, 600.0);
        t.register("skills", 2000.0, 800.0);
        t
    }

    #[test]
    fn test_nothing_revealed_above_fold() {
        let mut t = tracker();
        assert!(t.observe(0.0, 800.0).is_empty());
        assert!(!t.is_revealed("about"));
    }

    #[test]
    fn test_margin_delays_reveal() {
        let mut t = tracker();
        // Viewport bottom at 950, shrunk to 850: "about" starts at 900
        assert!(t.observe(150.0, 800.0).is_empty());
        // Shrunk bottom at 910
        assert_eq!(t.observe(210.0, 800.0), vec!["about".to_string()]);
    }

    #[test]
    fn test_reveal_is_one_time() {
        let mut t = tracker();
        assert_eq!(t.observe(500.0, 800.0), vec!["about".to_string()]);
        assert!(t.observe(500.0, 800.0).is_empty());
        // Scrolling back to the top never hides it
        t.observe(0.0, 800.0);
        assert!(t.is_revealed("about"));
    }

    #[test]
    fn test_several_revealed_at_once() {
        let mut t = tracker();
        let revealed = t.observe(1200.0, 1200.0);
        assert_eq!(revealed, vec!["about".to_string(), "skills".to_string()]);
    }

    #[test]
    fn test_tiny_viewport_reveals_nothing() {
        let mut t = tracker();
        assert!(t.observe(900.0, 150.0).is_empty());
    }

    #[test]
    fn test_reregister_keeps_state() {
        let mut t = tracker();
        t.observe(500.0, 800.0);
        t.register("about", 5000.0, 10.0);
        assert!(t.is_revealed("about"));
    }
}
