//! Simulation module
//!
//! The rock, the pointer and the per-frame integrator. Nothing in here
//! touches the platform or the renderer:
//! - Variable timestep (dt in seconds, unclamped)
//! - All state is owned by `World` and `InputState`, no globals
//! - Every operation is total; there are no error paths

pub mod input;
pub mod state;
pub mod tick;

pub use input::InputState;
pub use state::{Entity, SpriteSize, World};
pub use tick::{MotionState, tick};
