//! Pet Rock - a draggable, throwable rock on a canvas
//!
//! Core modules:
//! - `sim`: Entity state, pointer tracking and the per-frame integrator
//! - `renderer`: Surface abstraction, frame drawing, canvas backend
//! - `platform`: Wall-clock frame timing
//! - `app`: Event dispatch tying input, simulation and drawing together
//! - `settings`: World constants, overridable from JSON

pub mod app;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::{App, Event};
pub use error::{Error, Result};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Gravity (added to vy once per tick, scaled by mass)
    pub const GRAVITY: f32 = 9.8;
    /// Horizontal friction (subtracted from |vx| once per tick)
    pub const FRICTION: f32 = 1.0;

    /// Rock defaults
    pub const ROCK_MASS: f32 = 0.25;
    pub const ROCK_HITBOX_RADIUS: f32 = 50.0;
    /// Spin while airborne (degrees/sec)
    pub const ROCK_SPIN_RATE: f32 = 180.0;
    /// Visual scale applied once the sprite is loaded
    pub const ROCK_SPRITE_SCALE: f32 = 0.25;
    pub const ROCK_SPRITE_PATH: &str = "./assets/rock.png";

    /// Pointer delta to velocity multiplier on release
    pub const THROW_IMPULSE: f32 = 100.0;
    /// Velocity divisor for the squash/stretch warp
    pub const WARP_DIVISOR: f32 = 10_000.0;

    pub const BACKGROUND_COLOR: &str = "#232323";
    pub const CANVAS_ID: &str = "canvas";

    /// Pointer position before the first move event (off-surface)
    pub const POINTER_START: (f32, f32) = (-1.0, -1.0);
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    let d = b - a;
    (d.x * d.x + d.y * d.y).sqrt()
}

/// Unit vector in the direction of `v`, or zero when `v` has zero length.
///
/// Unlike `Vec2::normalize_or_zero`, non-finite input is passed through
/// rather than collapsed to zero.
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    let magnitude = (v.x * v.x + v.y * v.y).sqrt();
    if magnitude == 0.0 {
        return Vec2::ZERO;
    }
    v / magnitude
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn coord() -> impl Strategy<Value = f32> {
        (-40_000i32..40_000).prop_map(|v| v as f32 / 4.0)
    }

    fn point() -> impl Strategy<Value = Vec2> {
        (coord(), coord()).prop_map(|(x, y)| Vec2::new(x, y))
    }

    #[test]
    fn test_normalize_zero() {
        assert_eq!(normalize(Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn test_normalize_axis() {
        assert_eq!(normalize(Vec2::new(0.0, -7.0)), Vec2::new(0.0, -1.0));
        let diag = normalize(Vec2::new(3.0, 4.0));
        assert!((diag.x - 0.6).abs() < 1e-6);
        assert!((diag.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_distance_known() {
        assert_eq!(distance(Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0)), 5.0);
    }

    proptest! {
        #[test]
        fn normalize_is_unit_or_zero(v in point()) {
            let n = normalize(v);
            if v == Vec2::ZERO {
                prop_assert_eq!(n, Vec2::ZERO);
            } else {
                prop_assert!((n.length() - 1.0).abs() < 1e-5);
                // Same direction as the input
                prop_assert!(n.dot(v) > 0.0);
            }
        }

        #[test]
        fn distance_is_symmetric(a in point(), b in point()) {
            prop_assert_eq!(distance(a, b), distance(b, a));
        }

        #[test]
        fn distance_zero_iff_equal(a in point(), b in point()) {
            prop_assert_eq!(distance(a, a), 0.0);
            if a != b {
                prop_assert!(distance(a, b) > 0.0);
            }
        }
    }
}
