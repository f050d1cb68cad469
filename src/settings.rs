//! World constants
//!
//! Defaults match `consts`; a page can override any of them with JSON in the
//! canvas element's `data-settings` attribute. Nothing is ever written back.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::Result;

/// Physics tuning for the rock and the world it lives in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Physics {
    /// Downward acceleration applied while airborne
    pub gravity: f32,
    /// Horizontal deceleration applied every tick
    pub friction: f32,
    pub mass: f32,
    /// Pointer pickup distance
    pub hitbox_radius: f32,
    /// Airborne spin (degrees/sec)
    pub spin_rate: f32,
    /// Pointer delta to velocity multiplier on release
    pub throw_impulse: f32,
    /// Velocity divisor for the squash/stretch warp
    pub warp_divisor: f32,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            friction: FRICTION,
            mass: ROCK_MASS,
            hitbox_radius: ROCK_HITBOX_RADIUS,
            spin_rate: ROCK_SPIN_RATE,
            throw_impulse: THROW_IMPULSE,
            warp_divisor: WARP_DIVISOR,
        }
    }
}

/// Sprite asset settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteSettings {
    pub path: String,
    /// Visual scale applied once the image has loaded
    pub scale: f32,
}

impl Default for SpriteSettings {
    fn default() -> Self {
        Self {
            path: ROCK_SPRITE_PATH.to_string(),
            scale: ROCK_SPRITE_SCALE,
        }
    }
}

/// Everything tunable about the toy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub physics: Physics,
    pub sprite: SpriteSettings,
    /// CSS color used to clear the surface each frame
    pub background: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            physics: Physics::default(),
            sprite: SpriteSettings::default(),
            background: BACKGROUND_COLOR.to_string(),
        }
    }
}

impl Settings {
    /// Canvas attribute holding a JSON override
    pub const ATTRIBUTE: &'static str = "data-settings";

    /// Parse settings from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read overrides from the canvas element (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(canvas: &web_sys::HtmlCanvasElement) -> Result<Self> {
        match canvas.get_attribute(Self::ATTRIBUTE) {
            Some(json) => {
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from {}", Self::ATTRIBUTE);
                Ok(settings)
            }
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }
}
