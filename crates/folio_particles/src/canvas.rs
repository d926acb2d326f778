//! Drawing abstraction for the particle field

use folio_math::{Rgba, Vec2};

/// A 2D drawing surface the field renders into each frame
pub trait Canvas {
    /// Erase everything drawn so far
    fn clear(&mut self);

    /// Fill a circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Stroke a straight line segment
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

/// A recorded drawing command
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
}

/// Canvas that records commands in draw order
///
/// The GPU renderer consumes a `DrawList` once per frame.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Create an empty draw list
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands in the order they were issued
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been drawn
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of circles recorded
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    /// Number of lines recorded
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }
}

impl Canvas for DrawList {
    fn clear(&mut self) {
        self.commands.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Line { from, to, width, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut list = DrawList::new();
        list.fill_circle(Vec2::ZERO, 2.0, Rgba::WHITE);
        list.stroke_line(Vec2::ZERO, Vec2::X, 0.5, Rgba::WHITE);

        assert_eq!(list.len(), 2);
        assert_eq!(list.circle_count(), 1);
        assert_eq!(list.line_count(), 1);
        assert!(matches!(list.commands()[0], DrawCommand::Circle { .. }));
    }

    #[test]
    fn test_clear_empties_list() {
        let mut list = DrawList::new();
        list.fill_circle(Vec2::ZERO, 2.0, Rgba::WHITE);
        list.clear();
        assert!(list.is_empty());
    }
}
