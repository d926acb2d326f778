//! Rendering pipeline components
//!
//! GPU instance types and the instanced pipelines that draw the particle
//! background.

pub mod types;
pub mod particle_pipeline;

// Re-export types
pub use types::{CircleInstance, InstanceBatch, LineInstance, ScreenUniforms, AA_MARGIN};

// Re-export pipelines
pub use particle_pipeline::{clear_color, ParticlePipeline, QUAD_VERTEX_COUNT};
