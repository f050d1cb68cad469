//! Platform abstraction layer
//!
//! Browser wiring lives in the binary; the pieces here are host-agnostic:
//! - Time: wall-clock frame deltas

pub mod time;

pub use time::FrameClock;
