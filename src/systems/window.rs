//! Window management system
//!
//! Handles window creation, fullscreen toggle, and title updates.

use std::sync::Arc;
use folio_core::Theme;
use folio_particles::{FrameStats, SurfaceSize};
use winit::{
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window},
};
use crate::config::WindowConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            base_title: config.title.clone(),
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Drawing surface in physical pixels, None while minimized
    pub fn surface_size(&self) -> Option<SurfaceSize> {
        surface_size(self.window.inner_size())
    }

    /// Toggle fullscreen mode
    pub fn toggle_fullscreen(&self) {
        let new_fullscreen = if self.window.fullscreen().is_some() {
            None
        } else {
            Some(Fullscreen::Borderless(None))
        };
        self.window.set_fullscreen(new_fullscreen);
    }

    /// Update window title with theme, pause state and optional stats
    pub fn update_title(&self, theme: Theme, running: bool, stats: Option<FrameStats>) {
        self.window
            .set_title(&format_title(&self.base_title, theme, running, stats));
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Surface for a window size, None for a zero-area window
pub fn surface_size(size: winit::dpi::PhysicalSize<u32>) -> Option<SurfaceSize> {
    if size.width == 0 || size.height == 0 {
        None
    } else {
        Some(SurfaceSize::new(size.width as f32, size.height as f32))
    }
}

fn format_title(base: &str, theme: Theme, running: bool, stats: Option<FrameStats>) -> String {
    let mut title = format!("{} [{}]", base, theme.name());
    if !running {
        title.push_str(" [paused - Space to resume]");
    }
    if let Some(stats) = stats {
        title.push_str(&format!(
            " - {} particles (+{} -{})",
            stats.population, stats.spawned, stats.removed
        ));
    }
    title
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;

    #[test]
    fn test_title_running() {
        let title = format_title("Folio", Theme::Dark, true, None);
        assert_eq!(title, "Folio [dark]");
    }

    #[test]
    fn test_title_paused_with_stats() {
        let stats = FrameStats {
            updated: 40,
            removed: 2,
            spawned: 1,
            population: 41,
        };
        let title = format_title("Folio", Theme::Light, false, Some(stats));
        assert!(title.contains("[light]"));
        assert!(title.contains("Space to resume"));
        assert!(title.contains("41 particles"));
    }

    #[test]
    fn test_minimized_window_has_no_surface() {
        assert_eq!(surface_size(PhysicalSize::new(0, 600)), None);
        assert_eq!(
            surface_size(PhysicalSize::new(800, 600)),
            Some(SurfaceSize::new(800.0, 600.0))
        );
    }

    #[test]
    fn test_window_error_display() {
        let err = WindowError::CreationFailed("no display".to_string());
        assert_eq!(err.to_string(), "Window creation failed: no display");
    }
}
