//! Pointer tracking
//!
//! Mutated by host pointer callbacks between loop iterations, read by the
//! integrator.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::POINTER_START;

/// Current pointer state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputState {
    /// Last reported pointer position (surface pixels)
    pub position: Vec2,
    /// Previous position minus current position (old - new)
    pub delta: Vec2,
    pub down: bool,
    /// Down/up edge seen since the last frame ended (one-shot)
    pub changed: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            position: Vec2::new(POINTER_START.0, POINTER_START.1),
            delta: Vec2::ZERO,
            down: false,
            changed: false,
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer moved to `pos`
    pub fn pointer_moved(&mut self, pos: Vec2) {
        // Old minus new; the throw impulse subtracts this, so a throw follows
        // the pointer's recent motion.
        self.delta = self.position - pos;
        self.position = pos;
    }

    pub fn pointer_down(&mut self) {
        self.down = true;
        self.changed = true;
    }

    pub fn pointer_up(&mut self) {
        self.down = false;
        self.changed = true;
    }

    /// Clear the one-shot edge flag (end of every loop iteration)
    pub fn end_frame(&mut self) {
        self.changed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_off_surface() {
        let input = InputState::new();
        assert_eq!(input.position, Vec2::new(-1.0, -1.0));
        assert_eq!(input.delta, Vec2::ZERO);
        assert!(!input.down);
        assert!(!input.changed);
    }

    #[test]
    fn test_delta_is_old_minus_new() {
        let mut input = InputState::new();
        input.pointer_moved(Vec2::new(100.0, 100.0));
        input.pointer_moved(Vec2::new(90.0, 95.0));
        assert_eq!(input.position, Vec2::new(90.0, 95.0));
        assert_eq!(input.delta, Vec2::new(10.0, 5.0));
    }

    #[test]
    fn test_edges_set_changed() {
        let mut input = InputState::new();
        input.pointer_down();
        assert!(input.down && input.changed);

        input.end_frame();
        assert!(input.down);
        assert!(!input.changed);

        input.pointer_up();
        assert!(!input.down && input.changed);
    }
}
