//! 2D Mathematics Library
//!
//! This crate provides the screen-space vector and colour types shared by the
//! folio crates.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector with x, y components (screen space, y down)
//! - [`Rgba`] - Linear RGBA colour with hex parsing

mod color;
mod vec2;

pub use color::Rgba;
pub use vec2::Vec2;
