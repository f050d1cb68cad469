//! Display surface abstraction

use glam::Vec2;

/// A 2D drawing target with a save/restore transform stack, modeled on the
/// canvas 2D context. Transform calls compose onto the current transform.
pub trait Surface {
    /// Surface size in pixels
    fn size(&self) -> Vec2;

    /// Fill an axis-aligned rectangle with a CSS color
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: &str);

    /// Push the current transform
    fn save(&mut self);

    /// Pop back to the last saved transform
    fn restore(&mut self);

    fn translate(&mut self, offset: Vec2);

    fn rotate(&mut self, radians: f32);

    fn scale(&mut self, factor: Vec2);

    /// Draw the rock sprite with its top-left corner at the current origin
    fn draw_sprite(&mut self);
}
