//! Floating navigation bar state

use crate::content::{NavItem, NAV_ITEMS};

/// Scroll offset below which the bar is always shown
pub const HIDE_THRESHOLD: f32 = 128.0;

/// Visibility and mobile-menu state of the navbar
#[derive(Clone, Debug, PartialEq)]
pub struct Navbar {
    visible: bool,
    last_scroll: f32,
    mobile_open: bool,
}

impl Default for Navbar {
    fn default() -> Self {
        Self {
            visible: true,
            last_scroll: 0.0,
            mobile_open: false,
        }
    }
}

impl Navbar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a new scroll offset
    ///
    /// Scrolling down past the threshold hides the bar; any other move shows it.
    pub fn on_scroll(&mut self, scroll_y: f32) {
        self.visible = !(scroll_y > self.last_scroll && scroll_y > HIDE_THRESHOLD);
        self.last_scroll = scroll_y;
    }

    /// Navigate to an in-page anchor
    ///
    /// Closes the mobile menu and returns the matching item, if any.
    pub fn scroll_to(&mut self, href: &str) -> Option<&'static NavItem> {
        self.mobile_open = false;
        NAV_ITEMS.iter().find(|item| item.href == href)
    }

    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.mobile_open = !self.mobile_open;
        self.mobile_open
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_mobile_open(&self) -> bool {
        self.mobile_open
    }

    pub fn items(&self) -> &'static [NavItem] {
        NAV_ITEMS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_near_top() {
        let mut nav = Navbar::new();
        nav.on_scroll(100.0);
        assert!(nav.is_visible());
    }

    #[test]
    fn test_hidden_scrolling_down_past_threshold() {
        let mut nav = Navbar::new();
        nav.on_scroll(100.0);
        nav.on_scroll(300.0);
        assert!(!nav.is_visible());
    }

    #[test]
    fn test_shown_on_scroll_up() {
        let mut nav = Navbar::new();
        nav.on_scroll(500.0);
        assert!(!nav.is_visible());
        nav.on_scroll(450.0);
        assert!(nav.is_visible());
    }

    #[test]
    fn test_scroll_to_closes_menu() {
        let mut nav = Navbar::new();
        assert!(nav.toggle_mobile_menu());
        let item = nav.scroll_to("#projects").unwrap();
        assert_eq!(item.name, "Projects");
        assert!(!nav.is_mobile_open());
    }

    #[test]
    fn test_scroll_to_unknown_anchor() {
        let mut nav = Navbar::new();
        nav.toggle_mobile_menu();
        assert!(nav.scroll_to("#nowhere").is_none());
        assert!(!nav.is_mobile_open());
    }
}
