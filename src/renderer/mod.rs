//! 2D rendering module
//!
//! Drawing goes through the `Surface` trait: the browser backend wraps a
//! canvas 2D context, the recording backend keeps an in-memory transform
//! stack for headless runs and tests.

pub mod draw;
pub mod recording;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use draw::{draw_frame, draw_rock};
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::Surface;
