//! Event dispatch and the loop driver
//!
//! Pointer callbacks, the sprite-load callback and loop iterations all arrive
//! as `Event`s on the host's single task queue. Each `handle` call runs to
//! completion, so the world is never observed half-updated.

use glam::Vec2;

use crate::platform::FrameClock;
use crate::renderer::{Surface, draw_frame};
use crate::settings::Settings;
use crate::sim::{InputState, SpriteSize, World, tick};

/// Everything the host can tell the game
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Pointer moved to a surface position
    PointerMoved { x: f32, y: f32 },
    PointerDown,
    PointerUp,
    /// Sprite image finished loading with these pixel dimensions
    SpriteLoaded { width: f32, height: f32 },
    /// Loop iteration at wall-clock time `now_ms`
    Frame { now_ms: f64 },
}

/// Game instance holding all state
pub struct App {
    pub world: World,
    pub input: InputState,
    settings: Settings,
    clock: FrameClock,
    frames: u64,
}

impl App {
    /// Create the game for a surface of `width` x `height`, started at
    /// `start_ms` (wall clock).
    pub fn new(settings: Settings, width: f32, height: f32, start_ms: f64) -> Self {
        Self {
            world: World::new(width, height, &settings),
            input: InputState::new(),
            settings,
            clock: FrameClock::new(start_ms),
            frames: 0,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Loop iterations run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn handle<S: Surface>(&mut self, event: Event, surface: &mut S) {
        match event {
            Event::PointerMoved { x, y } => self.input.pointer_moved(Vec2::new(x, y)),
            Event::PointerDown => self.input.pointer_down(),
            Event::PointerUp => self.input.pointer_up(),
            Event::SpriteLoaded { width, height } => {
                self.world
                    .entity
                    .attach_sprite(SpriteSize::new(width, height), self.settings.sprite.scale);
                log::info!("Sprite loaded ({}x{})", width, height);
            }
            Event::Frame { now_ms } => self.frame(now_ms, surface),
        }
    }

    /// One loop iteration: integrate, draw, then clear the edge flag
    pub fn frame<S: Surface>(&mut self, now_ms: f64, surface: &mut S) {
        let dt = self.clock.advance(now_ms);
        tick(&mut self.world, &self.input, dt);
        draw_frame(&self.world, &self.settings.background, surface);
        self.input.end_frame();
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;

    fn app() -> (App, RecordingSurface) {
        let app = App::new(Settings::default(), 800.0, 600.0, 0.0);
        let surface = RecordingSurface::new(Vec2::new(800.0, 600.0));
        (app, surface)
    }

    #[test]
    fn test_frames_before_sprite_only_clear() {
        let (mut app, mut surface) = app();
        app.handle(Event::Frame { now_ms: 16.0 }, &mut surface);
        app.handle(Event::Frame { now_ms: 32.0 }, &mut surface);

        assert_eq!(app.frames(), 2);
        assert_eq!(surface.commands().len(), 2);
        assert!(surface.sprite_transforms().is_empty());
    }

    #[test]
    fn test_sprite_load_makes_rock_drawable() {
        let (mut app, mut surface) = app();
        app.handle(Event::SpriteLoaded { width: 400.0, height: 200.0 }, &mut surface);
        assert_eq!(app.world.entity.scale, 0.25);

        app.handle(Event::Frame { now_ms: 16.0 }, &mut surface);
        assert_eq!(surface.sprite_transforms().len(), 1);
    }

    #[test]
    fn test_changed_is_one_shot() {
        let (mut app, mut surface) = app();
        app.handle(Event::PointerDown, &mut surface);
        assert!(app.input.changed);

        app.handle(Event::Frame { now_ms: 16.0 }, &mut surface);
        assert!(!app.input.changed);
        assert!(app.input.down);
    }

    #[test]
    fn test_drag_and_throw() {
        let (mut app, mut surface) = app();
        app.handle(Event::SpriteLoaded { width: 400.0, height: 200.0 }, &mut surface);

        let start = app.world.entity.pos;
        let script = [
            Event::PointerMoved { x: start.x, y: start.y },
            Event::PointerDown,
            Event::Frame { now_ms: 16.0 },
            Event::PointerMoved { x: start.x - 10.0, y: start.y - 5.0 },
            Event::Frame { now_ms: 32.0 },
            Event::PointerUp,
            Event::Frame { now_ms: 48.0 },
        ];
        for event in script {
            app.handle(event, &mut surface);
        }

        let rock = &app.world.entity;
        assert!(!rock.held);
        assert_eq!(rock.vel, Vec2::new(-1000.0, -500.0));
    }

    #[test]
    fn test_settles_on_floor() {
        let (mut app, mut surface) = app();
        app.handle(Event::SpriteLoaded { width: 400.0, height: 200.0 }, &mut surface);

        let mut now = 0.0;
        for _ in 0..600 {
            now += 16.0;
            app.handle(Event::Frame { now_ms: now }, &mut surface);
        }

        let rock = &app.world.entity;
        assert!(rock.feet_y().unwrap() >= app.world.floor_y);
        assert_eq!(rock.vel.y, 0.0);
        assert_eq!(rock.rotation_vel, 0.0);
    }
}
