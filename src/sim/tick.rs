//! Per-frame integrator
//!
//! Advances the rock by one variable timestep. Floor contact and wall
//! contact are two separate policies: the floor is handled by the
//! `MotionState` machine (the rock rests, it never bounces), walls and the
//! ceiling by velocity reflection in `reflect_off_walls`.

use glam::Vec2;

use super::input::InputState;
use super::state::{Entity, World};
use crate::settings::Physics;
use crate::{distance, normalize};

/// Which vertical regime the rock is in this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionState {
    /// Slaved to the pointer
    Held,
    /// Feet strictly above the floor: falling and spinning
    Airborne,
    /// Feet at or below the floor, or no sprite yet: at rest vertically
    Grounded,
}

impl MotionState {
    /// Floor policy. Without a loaded sprite the rock has no extent and
    /// counts as grounded.
    pub fn of(entity: &Entity, floor_y: f32) -> Self {
        if entity.held {
            MotionState::Held
        } else if entity.feet_y().is_some_and(|feet| feet < floor_y) {
            MotionState::Airborne
        } else {
            MotionState::Grounded
        }
    }
}

/// Advance the world by `dt` seconds.
///
/// `dt` is not clamped: a stalled frame produces a proportionally large jump.
pub fn tick(world: &mut World, input: &InputState, dt: f32) {
    let physics = world.physics;
    let floor_y = world.floor_y;
    let bounds = world.bounds;
    let rock = &mut world.entity;

    match MotionState::of(rock, floor_y) {
        MotionState::Held => {
            rock.vel.y = 0.0;
            rock.pos = input.position;
            rock.rotation_vel = 0.0;
        }
        MotionState::Airborne => {
            // F = ma, applied per tick rather than per second
            rock.vel.y += rock.mass * physics.gravity;
            rock.rotation_vel = physics.spin_rate;
        }
        MotionState::Grounded => {
            rock.vel.y = 0.0;
            rock.rotation_vel = 0.0;
        }
    }

    apply_friction(rock, physics.friction);

    // Explicit Euler
    rock.pos += rock.vel * dt;
    rock.rotation += rock.rotation_vel * dt;

    rock.warp = warp_for(rock.scale, rock.vel, physics.warp_divisor);

    reflect_off_walls(rock, bounds);
    apply_pointer(rock, input, &physics);
}

/// Squash/stretch direction for the given velocity (cosmetic only)
pub fn warp_for(scale: f32, vel: Vec2, divisor: f32) -> Vec2 {
    normalize(Vec2::splat(scale) + vel / divisor)
}

/// Decelerate horizontally. Can overshoot zero when friction exceeds |vx|.
fn apply_friction(rock: &mut Entity, friction: f32) {
    if rock.vel.x != 0.0 {
        rock.vel.x -= rock.vel.x.signum() * friction;
    }
}

/// Wall policy: point velocity away from the left/right edges and the
/// ceiling. There is no bottom edge here; the floor belongs to `MotionState`.
fn reflect_off_walls(rock: &mut Entity, bounds: Vec2) {
    if let Some(half) = rock.half_extent() {
        if rock.pos.x > bounds.x - half.x {
            rock.vel.x = -rock.vel.x.abs();
        }
        if rock.pos.x < half.x {
            rock.vel.x = rock.vel.x.abs();
        }
    }
    if rock.pos.y < 0.0 {
        rock.vel.y = rock.vel.y.abs();
    }
}

/// Pickup, throw and release
fn apply_pointer(rock: &mut Entity, input: &InputState, physics: &Physics) {
    let in_hitbox = distance(input.position, rock.pos) < rock.hitbox_radius;

    // Sticky: only pointer-up releases, not leaving the hitbox
    if in_hitbox && input.down {
        if !rock.held {
            log::debug!("Picked up at ({:.1}, {:.1})", rock.pos.x, rock.pos.y);
        }
        rock.held = true;
    }

    // Fires only on the frame the pointer went up
    if input.changed && !input.down && in_hitbox {
        rock.vel -= input.delta * physics.throw_impulse;
        log::debug!("Thrown with velocity ({:.1}, {:.1})", rock.vel.x, rock.vel.y);
    }

    if !input.down {
        rock.held = false;
    }
}
