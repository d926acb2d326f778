//! Particle simulation system
//!
//! Manages the background layer loop including:
//! - Frame pacing (the field advances in fixed per-frame steps)
//! - Pointer forwarding and the ring overlay
//! - Mount, unmount, and re-initialize

use std::time::{Duration, Instant};

use folio_input::{PointerEvent, PointerTracker};
use folio_particles::{
    Canvas, DrawList, FrameLoop, FrameOutcome, FrameStats, ParticleField, ParticleLayer,
    SurfaceSize,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::ParticlesConfig;

/// Most steps run in one update after a stall
const MAX_CATCH_UP_STEPS: u32 = 4;

/// Result of a simulation update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationResult {
    /// Whether the host should schedule another redraw
    pub redraw: bool,
    /// Steps run in this update
    pub steps: u32,
    /// Stats of the last step, if any ran
    pub stats: Option<FrameStats>,
}

/// Drives the particle layer from the window's redraw loop
pub struct SimulationSystem {
    layer: ParticleLayer<StdRng>,
    frame_loop: Option<FrameLoop>,
    pointer: PointerTracker,
    particles: DrawList,
    overlay: DrawList,
    interval: Duration,
    accumulator: Duration,
    last_update: Instant,
    last_stats: Option<FrameStats>,
    ring_segments: usize,
}

impl SimulationSystem {
    /// Create an unmounted simulation from config
    pub fn new(config: &ParticlesConfig, ring_segments: usize) -> Self {
        let rng = match config.seed {
            Some(seed) => {
                log::info!("Seeding particle field with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };

        let mut field = ParticleField::new(config.to_field_config(), rng);
        if let Some(palette) = config.palette() {
            field = field.with_palette(palette);
        }

        Self {
            layer: ParticleLayer::new(field),
            frame_loop: None,
            pointer: PointerTracker::new(),
            particles: DrawList::new(),
            overlay: DrawList::new(),
            interval: config.frame_interval(),
            accumulator: Duration::ZERO,
            last_update: Instant::now(),
            last_stats: None,
            ring_segments,
        }
    }

    /// Mount the layer on a surface and start the loop
    pub fn mount(&mut self, surface: Option<SurfaceSize>) {
        self.frame_loop = Some(self.layer.mount(surface));
        // First redraw after mounting steps immediately
        self.accumulator = self.interval;
        self.last_update = Instant::now();
    }

    /// Cancel the loop and detach listeners
    pub fn unmount(&mut self) {
        if let Some(frame_loop) = self.frame_loop.take() {
            frame_loop.cancel();
        }
        self.layer.unmount();
    }

    /// Unmount a running layer or remount a stopped one
    ///
    /// Returns true if the layer is running afterwards.
    pub fn toggle_pause(&mut self, surface: Option<SurfaceSize>) -> bool {
        if self.is_running() {
            self.unmount();
            false
        } else {
            self.mount(surface);
            true
        }
    }

    /// Scatter a fresh set of particles without touching the loop
    pub fn reset(&mut self, surface: Option<SurfaceSize>) {
        self.layer.field_mut().initialize(surface);
        log::info!("Particle field re-initialized with {} particles", self.layer.field().len());
    }

    /// Whether the frame loop is running
    pub fn is_running(&self) -> bool {
        self.layer.is_mounted()
    }

    /// Forward a pointer event to the layer
    pub fn pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Moved(position) => {
                self.layer.pointer_moved(position);
            }
            PointerEvent::Left => self.layer.pointer_left(),
        }
    }

    /// Tracker for cursor events
    pub fn pointer_mut(&mut self) -> &mut PointerTracker {
        &mut self.pointer
    }

    /// Forward a surface resize to the layer
    pub fn resize(&mut self, surface: Option<SurfaceSize>) {
        self.layer.resize(surface);
    }

    /// Run the steps due since the last update
    pub fn update(&mut self) -> SimulationResult {
        self.update_at(Instant::now())
    }

    /// Run the steps due at `now`
    pub fn update_at(&mut self, now: Instant) -> SimulationResult {
        let elapsed = now.saturating_duration_since(self.last_update);
        self.last_update = now;
        self.pointer.update(elapsed.as_secs_f32());

        // Cap the backlog so a long stall does not fast-forward the field
        let max_backlog = self.interval * MAX_CATCH_UP_STEPS;
        self.accumulator = (self.accumulator + elapsed).min(max_backlog);

        let mut steps = 0;
        let mut stats = None;
        let mut running = self.is_running();
        while running && self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            match self.layer.frame(&mut self.particles) {
                FrameOutcome::Continue(frame_stats) => {
                    log::trace!(
                        "Frame {}: {} alive, {} removed, {} spawned",
                        self.layer.frame_count(),
                        frame_stats.population,
                        frame_stats.removed,
                        frame_stats.spawned
                    );
                    stats = Some(frame_stats);
                    steps += 1;
                }
                FrameOutcome::Stopped => running = false,
            }
        }

        if stats.is_some() {
            self.last_stats = stats;
        }
        self.rebuild_overlay();

        SimulationResult {
            redraw: running,
            steps,
            stats,
        }
    }

    fn rebuild_overlay(&mut self) {
        self.overlay.clear();
        if !self.is_running() {
            return;
        }
        if let Some(ring) = self.pointer.ring() {
            for (from, to) in ring.segments(self.ring_segments) {
                self.overlay.stroke_line(from, to, ring.width, ring.color);
            }
        }
    }

    /// Draw lists for the renderer, bottom to top
    pub fn draw_lists(&self) -> [&DrawList; 2] {
        [&self.particles, &self.overlay]
    }

    /// Stats of the most recent step
    pub fn last_stats(&self) -> Option<FrameStats> {
        self.last_stats
    }

    /// Frames run since the last mount
    pub fn frame_count(&self) -> u64 {
        self.layer.frame_count()
    }

    /// Live particle count
    pub fn population(&self) -> usize {
        self.layer.field().len()
    }
}
