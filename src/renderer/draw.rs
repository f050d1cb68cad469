//! Frame drawing

use super::surface::Surface;
use crate::sim::{Entity, World};

/// Repaint the whole surface and draw the rock on top
pub fn draw_frame<S: Surface>(world: &World, background: &str, surface: &mut S) {
    let size = surface.size();
    surface.fill_rect(glam::Vec2::ZERO, size, background);
    draw_rock(&world.entity, surface);
}

/// Draw the rock rotated and warped about its center.
///
/// Returns false (and draws nothing) until the sprite has loaded.
pub fn draw_rock<S: Surface>(rock: &Entity, surface: &mut S) -> bool {
    let Some(sprite) = rock.sprite else {
        return false;
    };

    // Order matters: pivot on the sprite center, not its top-left corner
    surface.save();
    surface.translate(rock.pos);
    surface.rotate(rock.rotation.to_radians());
    surface.scale(rock.warp * rock.scale);
    surface.translate(-sprite.as_vec2() / 2.0);
    surface.draw_sprite();
    surface.restore();

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::{DrawCommand, RecordingSurface};
    use crate::settings::Settings;
    use crate::sim::SpriteSize;
    use glam::Vec2;

    fn world() -> World {
        World::new(800.0, 600.0, &Settings::default())
    }

    fn assert_close(a: Vec2, b: Vec2) {
        assert!((a - b).length() < 1e-3, "{a} != {b}");
    }

    #[test]
    fn test_unloaded_draws_background_only() {
        let world = world();
        let mut surface = RecordingSurface::new(Vec2::new(800.0, 600.0));

        draw_frame(&world, "#232323", &mut surface);

        assert_eq!(
            surface.commands(),
            &[DrawCommand::FillRect {
                origin: Vec2::ZERO,
                size: Vec2::new(800.0, 600.0),
                color: "#232323".to_string(),
            }]
        );
    }

    #[test]
    fn test_sprite_centered_on_rock() {
        let mut world = world();
        world.entity.attach_sprite(SpriteSize::new(400.0, 200.0), 0.25);
        world.entity.pos = Vec2::new(200.0, 300.0);
        world.entity.warp = Vec2::splat(std::f32::consts::FRAC_1_SQRT_2);
        let mut surface = RecordingSurface::new(Vec2::new(800.0, 600.0));

        draw_frame(&world, "#232323", &mut surface);

        let sprites = surface.sprite_transforms();
        assert_eq!(sprites.len(), 1);
        let transform = sprites[0];

        // Sprite center lands on the rock position
        assert_close(transform.transform_point2(Vec2::new(200.0, 100.0)), world.entity.pos);
        // Top-left corner is pulled in by scale * warp
        let k = 0.25 * std::f32::consts::FRAC_1_SQRT_2;
        assert_close(
            transform.transform_point2(Vec2::ZERO),
            Vec2::new(200.0 - 200.0 * k, 300.0 - 100.0 * k),
        );
        // Stack balanced
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn test_rotation_pivots_on_center() {
        let mut world = world();
        world.entity.attach_sprite(SpriteSize::new(400.0, 200.0), 0.25);
        world.entity.pos = Vec2::new(400.0, 150.0);
        world.entity.warp = Vec2::ONE;
        world.entity.rotation = 90.0;
        let mut surface = RecordingSurface::new(Vec2::new(800.0, 600.0));

        assert!(draw_rock(&world.entity, &mut surface));

        let transform = surface.sprite_transforms()[0];
        assert_close(transform.transform_point2(Vec2::new(200.0, 100.0)), Vec2::new(400.0, 150.0));
        // Quarter turn: the sprite's right edge midpoint now points down
        assert_close(transform.transform_point2(Vec2::new(400.0, 100.0)), Vec2::new(400.0, 200.0));
    }
}
