//! In-memory surface for headless runs and tests
//!
//! Tracks the transform stack with `Affine2` and records what would have
//! been drawn.

use glam::{Affine2, Vec2};

use super::surface::Surface;

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        origin: Vec2,
        size: Vec2,
        color: String,
    },
    /// Sprite drawn under this transform (sprite pixels to surface pixels)
    Sprite { transform: Affine2 },
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    transform: Affine2,
    stack: Vec<Affine2>,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            transform: Affine2::IDENTITY,
            stack: Vec::new(),
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Transforms of every sprite drawn so far
    pub fn sprite_transforms(&self) -> Vec<Affine2> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Sprite { transform } => Some(*transform),
                _ => None,
            })
            .collect()
    }

    /// Number of unmatched `save` calls
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Drop recorded commands, keeping the transform state
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: &str) {
        self.commands.push(DrawCommand::FillRect {
            origin,
            size,
            color: color.to_string(),
        });
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        // Unmatched restore is a no-op, as on a canvas
        if let Some(transform) = self.stack.pop() {
            self.transform = transform;
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform = self.transform * Affine2::from_translation(offset);
    }

    fn rotate(&mut self, radians: f32) {
        self.transform = self.transform * Affine2::from_angle(radians);
    }

    fn scale(&mut self, factor: Vec2) {
        self.transform = self.transform * Affine2::from_scale(factor);
    }

    fn draw_sprite(&mut self) {
        self.commands.push(DrawCommand::Sprite {
            transform: self.transform,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_restore() {
        let mut surface = RecordingSurface::new(Vec2::new(100.0, 100.0));
        surface.save();
        surface.translate(Vec2::new(10.0, 0.0));
        surface.draw_sprite();
        surface.restore();
        surface.draw_sprite();
        surface.restore();

        let transforms = surface.sprite_transforms();
        assert_eq!(transforms[0].translation, Vec2::new(10.0, 0.0));
        assert_eq!(transforms[1], Affine2::IDENTITY);
        assert_eq!(surface.depth(), 0);

        surface.clear();
        assert!(surface.commands().is_empty());
    }
}
