//! Pet Rock entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlImageElement, MouseEvent};

    use pet_rock::consts::CANVAS_ID;
    use pet_rock::renderer::CanvasSurface;
    use pet_rock::{App, Error, Event, Result, Settings};

    /// App plus the canvas it draws to
    struct Game {
        app: App,
        surface: CanvasSurface,
    }

    impl Game {
        fn dispatch(&mut self, event: Event) {
            self.app.handle(event, &mut self.surface);
        }
    }

    pub fn run() -> Result<()> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)?;

        log::info!("Pet Rock starting...");

        let window = web_sys::window().ok_or(Error::NoWindow)?;
        let document = window.document().ok_or(Error::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| Error::MissingElement {
                id: CANVAS_ID.to_string(),
            })?
            .dyn_into()
            .map_err(|_| Error::NotACanvas {
                id: CANVAS_ID.to_string(),
            })?;

        let settings = Settings::load(&canvas)?;

        // Sized once to the viewport; later resizes are ignored
        let width = window.inner_width()?.as_f64().unwrap_or(0.0) as u32;
        let height = window.inner_height()?.as_f64().unwrap_or(0.0) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let image = HtmlImageElement::new()?;
        let surface = CanvasSurface::new(&canvas, image.clone())?;
        let app = App::new(settings, width as f32, height as f32, js_sys::Date::now());
        let sprite_path = app.settings().sprite.path.clone();
        let game = Rc::new(RefCell::new(Game { app, surface }));

        log::info!("Surface {}x{}", width, height);

        // Sprite load races the first frames; the renderer skips the rock
        // until this fires
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                let mut g = game.borrow_mut();
                let image = g.surface.image();
                let event = Event::SpriteLoaded {
                    width: image.natural_width() as f32,
                    height: image.natural_height() as f32,
                };
                g.dispatch(event);
            });
            image.set_onload(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
        }
        image.set_src(&sprite_path);

        setup_input_handlers(&document, game.clone())?;

        schedule_frame(game);

        log::info!("Pet Rock running!");
        Ok(())
    }

    fn setup_input_handlers(document: &web_sys::Document, game: Rc<RefCell<Game>>) -> Result<()> {
        let body = document.body().ok_or(Error::NoBody)?;

        // Mouse move - absolute client position
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().dispatch(Event::PointerMoved {
                    x: event.client_x() as f32,
                    y: event.client_y() as f32,
                });
            });
            document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().dispatch(Event::PointerDown);
            });
            body.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().dispatch(Event::PointerUp);
            });
            body.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    /// Fire-and-reschedule at zero delay; no fixed frame rate
    fn schedule_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Lost window, loop stopped");
            return;
        };
        let closure = Closure::once(move || {
            game_loop(game);
        });
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            0,
        ) {
            log::error!("setTimeout failed, loop stopped: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().dispatch(Event::Frame {
            now_ms: js_sys::Date::now(),
        });

        schedule_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Pet Rock failed to start: {}", e);
        web_sys::console::error_1(&format!("Pet Rock failed to start: {e}").into());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Pet Rock (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the interactive version");

    headless::run();
}

/// Scripted run against an in-memory surface
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;
    use pet_rock::renderer::RecordingSurface;
    use pet_rock::{App, Event, Settings};

    const WIDTH: f32 = 800.0;
    const HEIGHT: f32 = 600.0;
    /// ~60 Hz
    const FRAME_MS: f64 = 16.0;
    const MAX_DROP_FRAMES: u64 = 10_000;

    pub fn run() {
        let mut app = App::new(Settings::default(), WIDTH, HEIGHT, 0.0);
        let mut surface = RecordingSurface::new(Vec2::new(WIDTH, HEIGHT));
        let mut now = 0.0;

        // A couple of frames before the sprite arrives
        for _ in 0..2 {
            now += FRAME_MS;
            app.handle(Event::Frame { now_ms: now }, &mut surface);
        }
        app.handle(Event::SpriteLoaded { width: 400.0, height: 400.0 }, &mut surface);

        // Drop
        while !landed(&app) && app.frames() < MAX_DROP_FRAMES {
            now += FRAME_MS;
            app.handle(Event::Frame { now_ms: now }, &mut surface);
        }
        log::info!(
            "Landed after {} frames at ({:.1}, {:.1})",
            app.frames(),
            app.world.entity.pos.x,
            app.world.entity.pos.y
        );

        // Grab, drag left, let go
        let pos = app.world.entity.pos;
        let script = [
            Event::PointerMoved { x: pos.x, y: pos.y },
            Event::PointerDown,
            Event::Frame { now_ms: now + FRAME_MS },
            Event::PointerMoved { x: pos.x - 4.0, y: pos.y - 6.0 },
            Event::Frame { now_ms: now + 2.0 * FRAME_MS },
            Event::PointerUp,
            Event::Frame { now_ms: now + 3.0 * FRAME_MS },
        ];
        for event in script {
            app.handle(event, &mut surface);
        }
        now += 3.0 * FRAME_MS;
        log::info!(
            "Thrown: velocity ({:.1}, {:.1})",
            app.world.entity.vel.x,
            app.world.entity.vel.y
        );

        for _ in 0..300 {
            now += FRAME_MS;
            app.handle(Event::Frame { now_ms: now }, &mut surface);
        }

        match serde_json::to_string_pretty(&app.world.entity) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize rock: {}", e),
        }
        log::info!(
            "{} frames, {} draw calls recorded",
            app.frames(),
            surface.commands().len()
        );
    }

    fn landed(app: &App) -> bool {
        app.world
            .entity
            .feet_y()
            .is_some_and(|feet| feet >= app.world.floor_y)
    }
}
