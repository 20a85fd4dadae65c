//! Rally Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent};

    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use rally_pong::consts::REFERENCE_TICK_RATE;
    use rally_pong::renderer::{self, CanvasSurface};
    use rally_pong::settings::Settings;
    use rally_pong::sim::{GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        rng: Pcg32,
        input: TickInput,
        settings: Settings,
        last_time: f64,
    }

    impl Game {
        /// Run one simulation tick
        fn update(&mut self, dt: f32) {
            let dt_scale = if self.settings.delta_time_scaling {
                dt * REFERENCE_TICK_RATE
            } else {
                1.0
            };
            tick(&mut self.state, &self.input, &mut self.rng, dt_scale);
        }

        /// Render the current frame
        fn render(&mut self) {
            renderer::render(&self.state, &mut self.surface);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Rally Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let width = canvas.width();
        let height = canvas.height();

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("canvas context error")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let settings = Settings::load();
        let seed = settings
            .seed
            .unwrap_or_else(|| js_sys::Date::now() as u64);

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(width as f32, height as f32),
            surface: CanvasSurface::new(ctx, width, height),
            rng: Pcg32::seed_from_u64(seed),
            input: TickInput::default(),
            settings,
            last_time: 0.0,
        }));

        log::info!("Game initialized with seed: {} ({}x{})", seed, width, height);

        setup_input_handlers(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Rally Pong running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move - player paddle follows the pointer's vertical position
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().input.pointer_y = Some(event.offset_y() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let y = touch.client_y() as f32 - rect.top() as f32;
                    game.borrow_mut().input.pointer_y = Some(y);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One host-scheduled frame: update, render, schedule the next
    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                1.0 / REFERENCE_TICK_RATE
            };
            g.last_time = time;

            g.update(dt);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use rally_pong::consts::{ARENA_HEIGHT, ARENA_WIDTH};
    use rally_pong::settings::Settings;
    use rally_pong::sim::{GameState, TickInput, tick};

    env_logger::init();
    log::info!("Rally Pong (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    // Headless smoke run: a few seconds of simulated play
    let settings = Settings::load();
    let seed = settings.seed.unwrap_or(7);
    let mut state = GameState::new(ARENA_WIDTH, ARENA_HEIGHT);
    let mut rng = Pcg32::seed_from_u64(seed);
    let input = TickInput::default();

    for _ in 0..600 {
        tick(&mut state, &input, &mut rng, 1.0);
    }

    log::info!(
        "ran 600 ticks with seed {}: ball at ({:.1}, {:.1}), speed {:.1}",
        seed,
        state.ball.pos.x,
        state.ball.pos.y,
        state.ball.speed
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
