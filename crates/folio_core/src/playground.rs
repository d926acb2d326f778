//! Code playground: demo selection, simulated run and copy feedback

use std::time::Duration;

use crate::content::{CodeDemo, CODE_DEMOS};

/// How long a run shows as in progress
pub const RUN_DURATION: Duration = Duration::from_millis(2000);
/// How long the copy button shows "Copied!"
pub const COPIED_DURATION: Duration = Duration::from_millis(2000);

#[derive(Clone, Debug)]
pub struct CodePlayground {
    demos: &'static [CodeDemo],
    active: usize,
    /// Time left on the current run
    running: Option<Duration>,
    /// Time left on the copy confirmation
    copied: Option<Duration>,
}

impl Default for CodePlayground {
    fn default() -> Self {
        Self::new(CODE_DEMOS)
    }
}

impl CodePlayground {
    pub fn new(demos: &'static [CodeDemo]) -> Self {
        Self {
            demos,
            active: 0,
            running: None,
            copied: None,
        }
    }

    /// Select a demo; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) {
        if index < self.demos.len() {
            self.active = index;
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> Option<&'static CodeDemo> {
        self.demos.get(self.active)
    }

    pub fn demos(&self) -> &'static [CodeDemo] {
        self.demos
    }

    /// Start a run
    ///
    /// Returns false if a run is already in progress or there is nothing
    /// to run.
    pub fn run(&mut self) -> bool {
        if self.running.is_some() || self.demos.is_empty() {
            return false;
        }
        self.running = Some(RUN_DURATION);
        true
    }

    /// Mark the active demo's code as copied
    ///
    /// Returns the code to place on the clipboard. Copying again restarts
    /// the confirmation timer.
    pub fn copy(&mut self) -> Option<&'static str> {
        let code = self.active()?.code;
        self.copied = Some(COPIED_DURATION);
        Some(code)
    }

    /// Advance the run and copy timers
    ///
    /// Returns true if either indicator changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let run_done = countdown(&mut self.running, dt);
        let copy_done = countdown(&mut self.copied, dt);
        run_done || copy_done
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn is_copied(&self) -> bool {
        self.copied.is_some()
    }

    /// Output pane text, hidden while a run is in progress
    pub fn output(&self) -> Option<&'static str> {
        if self.is_running() {
            return None;
        }
        self.active().map(|demo| demo.output)
    }

    pub fn run_label(&self) -> &'static str {
        if self.is_running() { "Running..." } else { "Run" }
    }

    pub fn copy_label(&self) -> &'static str {
        if self.is_copied() { "Copied!" } else { "Copy" }
    }
}

/// Count a timer down, clearing it on expiry; true when it expired
fn countdown(timer: &mut Option<Duration>, dt: Duration) -> bool {
    match *timer {
        Some(left) if left > dt => {
            *timer = Some(left - dt);
            false
        }
        Some(_) => {
            *timer = None;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_hides_output_until_done() {
        let mut p = CodePlayground::default();
        assert_eq!(p.output(), Some("✨ Interactive button component ready!"));

        assert!(p.run());
        assert!(p.is_running());
        assert_eq!(p.output(), None);
        assert_eq!(p.run_label(), "Running...");

        assert!(!p.tick(Duration::from_millis(1999)));
        assert!(p.is_running());
        assert!(p.tick(Duration::from_millis(1)));
        assert!(!p.is_running());
        assert!(p.output().is_some());
    }

    #[test]
    fn test_run_ignored_while_running() {
        let mut p = CodePlayground::default();
        assert!(p.run());
        p.tick(Duration::from_millis(1500));
        assert!(!p.run());
        p.tick(Duration::from_millis(500));
        assert!(!p.is_running());
        assert!(p.run());
    }

    #[test]
    fn test_copy_resets_after_timeout() {
        let mut p = CodePlayground::default();
        p.select(3);
        let code = p.copy().unwrap();
        assert!(code.starts_with("function binarySearch"));
        assert_eq!(p.copy_label(), "Copied!");

        p.tick(Duration::from_millis(1000));
        p.copy();
        p.tick(Duration::from_millis(1500));
        assert!(p.is_copied());
        p.tick(Duration::from_millis(500));
        assert!(!p.is_copied());
        assert_eq!(p.copy_label(), "Copy");
    }

    #[test]
    fn test_select_ignores_out_of_range() {
        let mut p = CodePlayground::default();
        p.select(2);
        assert_eq!(p.active().unwrap().title, "MongoDB Query");
        p.select(9);
        assert_eq!(p.active_index(), 2);
        assert_eq!(p.output(), Some("💾 User created successfully!"));
    }

    #[test]
    fn test_empty_playground() {
        static NONE: [CodeDemo; 0] = [];
        let mut p = CodePlayground::new(&NONE);
        assert!(!p.run());
        assert!(p.copy().is_none());
        assert!(p.output().is_none());
        assert!(!p.tick(Duration::from_secs(5)));
    }
}
