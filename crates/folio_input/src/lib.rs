//! Pointer input for the particle background
//!
//! Turns winit cursor events into pointer moves the particle layer consumes,
//! and keeps the state of the ring drawn around the cursor.

mod pointer_tracker;

pub use pointer_tracker::{PointerEvent, PointerTracker, Ring};
