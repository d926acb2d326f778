//! Application systems
//!
//! Modular systems extracted from main.rs for better organization and testability.

mod render;
mod simulation;
mod window;

pub use render::RenderSystem;
pub use simulation::{SimulationResult, SimulationSystem};
pub use window::{surface_size, WindowError, WindowSystem};
