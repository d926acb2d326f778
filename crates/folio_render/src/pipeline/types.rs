//! GPU-compatible data types for the particle pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};
use folio_particles::{DrawCommand, DrawList};

/// Extra pixels around each shape for the antialiased edge
pub const AA_MARGIN: f32 = 1.0;

/// Screen uniforms
/// Layout: 16 bytes total (must match particles.wgsl Screen)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ScreenUniforms {
    /// Surface size in pixels
    pub size: [f32; 2],
    pub _padding: [f32; 2],
}

impl ScreenUniforms {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: [width.max(1) as f32, height.max(1) as f32],
            _padding: [0.0; 2],
        }
    }
}

impl Default for ScreenUniforms {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// One filled circle, drawn as an instanced quad
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    /// Centre in surface pixels
    pub center: [f32; 2],
    /// Radius in pixels
    pub radius: f32,
    pub _padding: f32,
    /// Straight (non-premultiplied) RGBA
    pub color: [f32; 4],
}

/// One stroked segment, drawn as an instanced quad
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LineInstance {
    pub from: [f32; 2],
    pub to: [f32; 2],
    pub color: [f32; 4],
    /// Stroke width in pixels
    pub width: f32,
    pub _padding: [f32; 3],
}

/// Instances split by shape, in draw order within each shape
#[derive(Clone, Debug, Default)]
pub struct InstanceBatch {
    pub circles: Vec<CircleInstance>,
    pub lines: Vec<LineInstance>,
}

impl InstanceBatch {
    /// Convert a recorded draw list into GPU instances
    pub fn from_draw_list(list: &DrawList) -> Self {
        let mut batch = Self::default();
        batch.extend(list);
        batch
    }

    /// Append a draw list's commands
    pub fn extend(&mut self, list: &DrawList) {
        for command in list.commands() {
            match *command {
                DrawCommand::Circle { center, radius, color } => {
                    self.circles.push(CircleInstance {
                        center: center.to_array(),
                        radius,
                        _padding: 0.0,
                        color: color.to_array(),
                    });
                }
                DrawCommand::Line { from, to, width, color } => {
                    self.lines.push(LineInstance {
                        from: from.to_array(),
                        to: to.to_array(),
                        color: color.to_array(),
                        width,
                        _padding: [0.0; 3],
                    });
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.circles.clear();
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty() && self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_math::{Rgba, Vec2};
    use folio_particles::Canvas;
    use std::mem::size_of;

    #[test]
    fn test_screen_uniforms_size() {
        assert_eq!(size_of::<ScreenUniforms>(), 16);
    }

    #[test]
    fn test_circle_instance_size() {
        // 2 floats center + radius + padding + 4 floats color = 32 bytes
        assert_eq!(size_of::<CircleInstance>(), 32);
    }

    #[test]
    fn test_line_instance_size() {
        // 4 floats endpoints + 4 floats color + width + 3 padding = 48 bytes
        assert_eq!(size_of::<LineInstance>(), 48);
    }

    #[test]
    fn test_zero_size_screen_is_clamped() {
        assert_eq!(ScreenUniforms::new(0, 0).size, [1.0, 1.0]);
    }

    #[test]
    fn test_batch_from_draw_list() {
        let mut list = DrawList::new();
        list.fill_circle(Vec2::new(10.0, 20.0), 3.0, Rgba::WHITE);
        list.stroke_line(Vec2::ZERO, Vec2::new(5.0, 5.0), 0.5, Rgba::WHITE.with_alpha(0.2));
        list.fill_circle(Vec2::new(1.0, 2.0), 1.0, Rgba::WHITE);

        let batch = InstanceBatch::from_draw_list(&list);

        assert_eq!(batch.circles.len(), 2);
        assert_eq!(batch.lines.len(), 1);
        assert_eq!(batch.circles[0].center, [10.0, 20.0]);
        assert_eq!(batch.circles[1].radius, 1.0);
        assert!((batch.lines[0].color[3] - 0.2).abs() < 1e-6);
    }
}
