//! World and entity state
//!
//! Everything the integrator mutates and the renderer reads lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::{Physics, Settings};

/// Pixel dimensions of the loaded sprite image
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteSize {
    pub width: f32,
    pub height: f32,
}

impl SpriteSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// The pet rock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Center position (surface pixels)
    pub pos: Vec2,
    /// Velocity (pixels/sec)
    pub vel: Vec2,
    pub mass: f32,
    /// Rotation in degrees
    pub rotation: f32,
    /// Degrees/sec
    pub rotation_vel: f32,
    /// Pointer pickup distance from `pos`
    pub hitbox_radius: f32,
    /// Position slaved to the pointer
    pub held: bool,
    /// Visual scale, zero until the sprite loads
    pub scale: f32,
    /// Squash/stretch factor derived from velocity each tick (cosmetic)
    pub warp: Vec2,
    /// Unknown until the sprite asset finishes loading
    pub sprite: Option<SpriteSize>,
}

impl Entity {
    pub fn new(pos: Vec2, physics: &Physics) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            mass: physics.mass,
            rotation: 0.0,
            rotation_vel: 0.0,
            hitbox_radius: physics.hitbox_radius,
            held: false,
            scale: 0.0,
            warp: Vec2::ZERO,
            sprite: None,
        }
    }

    /// Record the loaded sprite; the entity becomes drawable
    pub fn attach_sprite(&mut self, size: SpriteSize, scale: f32) {
        self.sprite = Some(size);
        self.scale = scale;
    }

    /// Whether the sprite has loaded
    pub fn is_drawable(&self) -> bool {
        self.sprite.is_some()
    }

    /// Half the on-screen size (sprite size times scale), if known
    pub fn half_extent(&self) -> Option<Vec2> {
        self.sprite.map(|s| s.as_vec2() / 2.0 * self.scale)
    }

    /// Y of the bottom edge, if the sprite has loaded
    pub fn feet_y(&self) -> Option<f32> {
        self.half_extent().map(|half| self.pos.y + half.y)
    }
}

/// Explicit world context passed to the integrator and renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub entity: Entity,
    /// Surface size captured at startup
    pub bounds: Vec2,
    /// Bottom boundary, equal to the startup surface height
    pub floor_y: f32,
    pub physics: Physics,
}

impl World {
    /// Create a world for a surface of the given size. The rock starts
    /// centered horizontally, a quarter of the way down.
    pub fn new(width: f32, height: f32, settings: &Settings) -> Self {
        let physics = settings.physics;
        Self {
            entity: Entity::new(Vec2::new(width / 2.0, height / 4.0), &physics),
            bounds: Vec2::new(width, height),
            floor_y: height,
            physics,
        }
    }
}
