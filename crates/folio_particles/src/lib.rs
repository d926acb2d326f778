//! Particle field simulation for the folio background layer
//!
//! This crate provides the decorative "constellation" animation, including:
//! - Short-lived particles with gravity, friction and edge bounce
//! - Proximity connections between nearby particles
//! - Pointer-driven and ambient spawning
//! - A mount/unmount lifecycle with an explicit cancellation handle
//!
//! Drawing goes through the [`Canvas`] trait; [`DrawList`] records the
//! commands for a GPU renderer or for inspection in tests.

pub mod canvas;
pub mod field;
pub mod layer;
pub mod palette;
pub mod particle;

// Re-export commonly used types
pub use canvas::{Canvas, DrawCommand, DrawList};
pub use field::{connection_alpha, FieldConfig, FrameStats, ParticleField, SurfaceSize};
pub use layer::{FrameLoop, FrameOutcome, LayerState, ParticleLayer};
pub use palette::Palette;
pub use particle::{Particle, ParticleKey};
