//! Mount/unmount lifecycle of the particle layer
//!
//! The animation loop has no natural exit: every frame schedules the next.
//! Mounting hands out a [`FrameLoop`] handle sharing a cancellation flag, and
//! the host stops re-scheduling as soon as [`ParticleLayer::frame`] reports
//! [`FrameOutcome::Stopped`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::canvas::Canvas;
use crate::field::{FrameStats, ParticleField, SurfaceSize};
use crate::particle::ParticleKey;
use folio_math::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

/// Lifecycle state of the layer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerState {
    /// Loop running, listeners attached
    Mounted,
    /// Loop cancelled, listeners detached
    Unmounted,
}

/// Result of running one frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Frame ran; the host should schedule the next one
    Continue(FrameStats),
    /// The loop is cancelled; do not schedule again
    Stopped,
}

/// Handle to a running frame loop
///
/// Clones share the same cancellation flag, so any holder can stop the loop.
#[derive(Clone, Debug, Default)]
pub struct FrameLoop {
    cancelled: Arc<AtomicBool>,
}

impl FrameLoop {
    fn new() -> Self {
        Self::default()
    }

    /// Stop the loop; the next frame reports `Stopped`
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Whether the loop has been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// The background particle layer: a field plus its mount lifecycle
pub struct ParticleLayer<R: Rng = StdRng> {
    field: ParticleField<R>,
    state: LayerState,
    frame_loop: Option<FrameLoop>,
    frames: u64,
}

impl<R: Rng> ParticleLayer<R> {
    /// Create an unmounted layer around a field
    pub fn new(field: ParticleField<R>) -> Self {
        Self {
            field,
            state: LayerState::Unmounted,
            frame_loop: None,
            frames: 0,
        }
    }

    /// Mount the layer: initialize the field and start a new loop
    ///
    /// Mounting an already mounted layer returns the running loop's handle.
    pub fn mount(&mut self, surface: Option<SurfaceSize>) -> FrameLoop {
        if let (LayerState::Mounted, Some(handle)) = (self.state, &self.frame_loop) {
            if !handle.is_cancelled() {
                return handle.clone();
            }
        }

        self.field.initialize(surface);
        let handle = FrameLoop::new();
        self.frame_loop = Some(handle.clone());
        self.state = LayerState::Mounted;
        self.frames = 0;

        match surface {
            Some(s) => log::info!(
                "Particle layer mounted on {}x{} surface with {} particles",
                s.width,
                s.height,
                self.field.len()
            ),
            None => log::debug!("Particle layer mounted without a drawing surface"),
        }
        handle
    }

    /// Unmount the layer: cancel the loop and detach listeners
    pub fn unmount(&mut self) {
        if let Some(handle) = self.frame_loop.take() {
            handle.cancel();
        }
        if self.state == LayerState::Mounted {
            log::info!("Particle layer unmounted after {} frames", self.frames);
        }
        self.state = LayerState::Unmounted;
    }

    /// Current lifecycle state
    ///
    /// A layer whose handle was cancelled elsewhere reports `Unmounted`.
    pub fn state(&self) -> LayerState {
        match &self.frame_loop {
            Some(handle) if self.state == LayerState::Mounted && !handle.is_cancelled() => {
                LayerState::Mounted
            }
            _ => LayerState::Unmounted,
        }
    }

    /// Whether the loop is running
    pub fn is_mounted(&self) -> bool {
        self.state() == LayerState::Mounted
    }

    /// Frames run since the last mount
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Pointer move listener
    pub fn pointer_moved(&mut self, position: Vec2) -> Option<ParticleKey> {
        if !self.is_mounted() {
            return None;
        }
        self.field.pointer_moved(position)
    }

    /// Pointer leave listener
    pub fn pointer_left(&mut self) {
        if self.is_mounted() {
            self.field.pointer_left();
        }
    }

    /// Resize listener
    pub fn resize(&mut self, surface: Option<SurfaceSize>) {
        if !self.is_mounted() {
            return;
        }
        self.field.resize(surface);
        if let Some(s) = surface {
            log::debug!("Particle surface resized to {}x{}", s.width, s.height);
        }
    }

    /// Run one frame: update, then draw
    pub fn frame<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> FrameOutcome {
        if !self.is_mounted() {
            self.state = LayerState::Unmounted;
            return FrameOutcome::Stopped;
        }

        let stats = self.field.update();
        self.field.draw(canvas);
        self.frames += 1;
        FrameOutcome::Continue(stats)
    }

    /// The underlying field
    pub fn field(&self) -> &ParticleField<R> {
        &self.field
    }

    /// Mutable access to the underlying field
    pub fn field_mut(&mut self) -> &mut ParticleField<R> {
        &mut self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawList;
    use crate::field::FieldConfig;
    use rand::SeedableRng;

    fn layer() -> ParticleLayer<StdRng> {
        ParticleLayer::new(ParticleField::new(
            FieldConfig::default(),
            StdRng::seed_from_u64(1),
        ))
    }

    const SURFACE: SurfaceSize = SurfaceSize { width: 800.0, height: 600.0 };

    #[test]
    fn test_new_layer_is_unmounted() {
        let mut layer = layer();
        assert_eq!(layer.state(), LayerState::Unmounted);
        assert_eq!(layer.frame(&mut DrawList::new()), FrameOutcome::Stopped);
    }

    #[test]
    fn test_mount_runs_frames() {
        let mut layer = layer();
        let handle = layer.mount(Some(SURFACE));
        assert!(!handle.is_cancelled());
        assert_eq!(layer.field().len(), 30);

        let mut list = DrawList::new();
        assert!(matches!(layer.frame(&mut list), FrameOutcome::Continue(_)));
        assert_eq!(layer.frame_count(), 1);
        assert!(list.circle_count() >= 30);
    }

    #[test]
    fn test_unmount_cancels_handle() {
        let mut layer = layer();
        let handle = layer.mount(Some(SURFACE));
        layer.unmount();

        assert!(handle.is_cancelled());
        assert_eq!(layer.state(), LayerState::Unmounted);
        assert_eq!(layer.frame(&mut DrawList::new()), FrameOutcome::Stopped);
    }

    #[test]
    fn test_cancel_through_handle_stops_loop() {
        let mut layer = layer();
        let handle = layer.mount(Some(SURFACE));
        let shared = handle.clone();
        shared.cancel();

        assert_eq!(layer.frame(&mut DrawList::new()), FrameOutcome::Stopped);
        assert!(!layer.is_mounted());
    }

    #[test]
    fn test_listeners_detached_after_unmount() {
        let mut layer = layer();
        layer.mount(Some(SURFACE));
        layer.field_mut().config.pointer_spawn_chance = 1.0;
        layer.unmount();

        let count = layer.field().len();
        assert!(layer.pointer_moved(Vec2::new(5.0, 5.0)).is_none());
        assert_eq!(layer.field().len(), count);

        layer.resize(Some(SurfaceSize::new(10.0, 10.0)));
        assert_eq!(layer.field().surface(), Some(SURFACE));
    }

    #[test]
    fn test_remount_starts_fresh_loop() {
        let mut layer = layer();
        let first = layer.mount(Some(SURFACE));
        layer.frame(&mut DrawList::new());
        layer.unmount();

        let second = layer.mount(Some(SURFACE));
        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
        assert_eq!(layer.frame_count(), 0);
    }

    #[test]
    fn test_mount_twice_returns_running_handle() {
        let mut layer = layer();
        let first = layer.mount(Some(SURFACE));
        layer.frame(&mut DrawList::new());
        let again = layer.mount(Some(SURFACE));

        again.cancel();
        assert!(first.is_cancelled());
        assert_eq!(layer.frame_count(), 1);
    }

    #[test]
    fn test_mount_without_surface_draws_nothing() {
        let mut layer = layer();
        layer.mount(None);
        let mut list = DrawList::new();
        assert_eq!(
            layer.frame(&mut list),
            FrameOutcome::Continue(FrameStats::default())
        );
        assert!(list.is_empty());
    }
}
