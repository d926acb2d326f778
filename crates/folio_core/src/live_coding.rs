//! Hero editor that types snippets out line by line

use std::time::Duration;

use crate::content::{CodeSnippet, CODE_SNIPPETS};

/// Delay before each line appears
pub const LINE_INTERVAL: Duration = Duration::from_millis(150);
/// Pause on a finished snippet before the next one starts
pub const SNIPPET_HOLD: Duration = Duration::from_millis(3000);

#[derive(Clone, Debug)]
pub struct LiveCoding {
    snippets: &'static [CodeSnippet],
    index: usize,
    visible_lines: usize,
    elapsed: Duration,
}

impl Default for LiveCoding {
    fn default() -> Self {
        Self::new(CODE_SNIPPETS)
    }
}

impl LiveCoding {
    pub fn new(snippets: &'static [CodeSnippet]) -> Self {
        Self {
            snippets,
            index: 0,
            visible_lines: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Advance the animation
    ///
    /// Returns true if the visible text or snippet changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.snippets.is_empty() {
            return false;
        }
        self.elapsed += dt;
        let mut changed = false;
        loop {
            let wait = if self.is_typing() { LINE_INTERVAL } else { SNIPPET_HOLD };
            if self.elapsed < wait {
                break;
            }
            self.elapsed -= wait;
            if self.is_typing() {
                self.visible_lines += 1;
            } else {
                self.index = (self.index + 1) % self.snippets.len();
                self.visible_lines = 0;
            }
            changed = true;
        }
        changed
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&'static CodeSnippet> {
        self.snippets.get(self.index)
    }

    pub fn title(&self) -> &'static str {
        self.current().map_or("", |s| s.title)
    }

    pub fn visible_lines(&self) -> usize {
        self.visible_lines
    }

    /// Lines in the current snippet
    pub fn total_lines(&self) -> usize {
        self.current().map_or(0, |s| s.code.lines().count())
    }

    /// Still revealing lines; the cursor is shown while this holds
    pub fn is_typing(&self) -> bool {
        self.visible_lines < self.total_lines()
    }

    /// The revealed lines, one per entry
    pub fn visible_code(&self) -> Vec<&'static str> {
        self.current()
            .map(|s| s.code.lines().take(self.visible_lines).collect())
            .unwrap_or_default()
    }
}
