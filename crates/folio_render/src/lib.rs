//! Particle Rendering Library
//!
//! This crate provides the wgpu-based pipeline that draws the particle
//! background recorded by `folio_particles`.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::ParticlePipeline`] - Instanced circles and connection lines
//! - [`pipeline::InstanceBatch`] - Converts a `DrawList` to GPU instances

pub mod context;
pub mod error;
pub mod pipeline;

pub use error::RenderError;
