//! Goal Kick entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, PointerEvent};

    use goal_kick::camera::OrbitCamera;
    use goal_kick::consts::*;
    use goal_kick::hud::Hud;
    use goal_kick::renderer::RenderState;
    use goal_kick::scene::Scene;
    use goal_kick::sim::{MatchEvent, MatchState, Shift, TickInput, take_substeps, tick};
    use goal_kick::{RenderError, Settings};

    thread_local! {
        static GAME: RefCell<Option<Rc<RefCell<Game>>>> = const { RefCell::new(None) };
    }

    /// Game instance holding all state
    struct Game {
        state: MatchState,
        settings: Settings,
        camera: OrbitCamera,
        render_state: RenderState,
        hud: Hud,
        accumulator: f32,
        last_time: f64,
        input: TickInput,
        /// Last pointer position while dragging the camera
        drag_from: Option<(f32, f32)>,
    }

    impl Game {
        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            self.accumulator += dt.min(0.1);

            for _ in 0..take_substeps(&mut self.accumulator) {
                tick(&mut self.state, &self.input);

                // Clear one-shot inputs after processing
                self.input = TickInput::default();
            }

            for event in self.state.drain_events() {
                if let MatchEvent::Launched(session) = event {
                    log::info!(
                        "Kick {} (drift {:.4} / {:.4})",
                        self.state.kicks,
                        session.player_drift,
                        session.computer_drift
                    );
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            match self.render_state.render(&self.state, &self.camera) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.render_state.resize(width, height);
            self.camera.set_viewport(width, height);
        }
    }

    fn with_game(f: impl FnOnce(&mut Game)) {
        GAME.with(|slot| {
            if let Some(game) = slot.borrow().as_ref() {
                f(&mut game.borrow_mut());
            }
        });
    }

    /// Kick both footballs; ignored while either is in flight
    #[wasm_bindgen(js_name = kickGoal)]
    pub fn kick_goal() {
        with_game(|g| g.input.kick = true);
    }

    /// Nudge the player's football left; ignored while it is in flight
    #[wasm_bindgen(js_name = moveLeft)]
    pub fn move_left() {
        with_game(|g| g.input.shifts.push(Shift::Left));
    }

    /// Nudge the player's football right; ignored while it is in flight
    #[wasm_bindgen(js_name = moveRight)]
    pub fn move_right() {
        with_game(|g| g.input.shifts.push(Shift::Right));
    }

    /// Canvas backing size in device pixels
    fn canvas_size(window: &web_sys::Window, canvas: &HtmlCanvasElement) -> (u32, u32) {
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        (width.max(1), height.max(1))
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
        }

        log::info!("Goal Kick starting...");

        if let Err(e) = start().await {
            log::error!("Failed to start: {}", e);
        }
    }

    async fn start() -> Result<(), RenderError> {
        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return Ok(());
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return Ok(());
        };
        let Some(canvas) = document
            .query_selector(".webgl")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No canvas with class .webgl");
            return Ok(());
        };

        let (width, height) = canvas_size(&window, &canvas);
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let scene = Scene::build(&settings);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state =
            RenderState::new(surface, &adapter, width, height, &scene, &settings).await?;

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: MatchState::new(seed),
            camera: OrbitCamera::from_rig(&scene.camera, width, height),
            settings,
            render_state,
            hud: Hud::new(),
            accumulator: 0.0,
            last_time: 0.0,
            input: TickInput::default(),
            drag_from: None,
        }));
        log::info!("Match initialized with seed: {}", seed);

        GAME.with(|slot| *slot.borrow_mut() = Some(game.clone()));

        setup_input_handlers(&canvas, game.clone());
        setup_buttons();
        setup_resize(canvas, game.clone());

        request_animation_frame(game);

        log::info!("Goal Kick running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Drag to orbit
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let mut g = game.borrow_mut();
                if g.settings.orbit_controls {
                    g.drag_from = Some((event.client_x() as f32, event.client_y() as f32));
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let mut g = game.borrow_mut();
                if let Some((x0, y0)) = g.drag_from {
                    let (x, y) = (event.client_x() as f32, event.client_y() as f32);
                    let sensitivity = g.settings.orbit_sensitivity;
                    g.camera.rotate(x - x0, y - y0, sensitivity);
                    g.drag_from = Some((x, y));
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        for name in ["pointerup", "pointerleave"] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                game.borrow_mut().drag_from = None;
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    " " | "Enter" => g.input.kick = true,
                    "ArrowLeft" | "a" | "A" => g.input.shifts.push(Shift::Left),
                    "ArrowRight" | "d" | "D" => g.input.shifts.push(Shift::Right),
                    "o" | "O" => {
                        let enabled = g.settings.toggle_orbit_controls();
                        g.settings.save();
                        g.drag_from = None;
                        log::info!("Orbit controls {}", if enabled { "on" } else { "off" });
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Optional on-page buttons
    fn setup_buttons() {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let buttons: [(&str, fn()); 3] = [
            ("kick-btn", kick_goal),
            ("left-btn", move_left),
            ("right-btn", move_right),
        ];
        for (id, action) in buttons {
            if let Some(btn) = document.get_element_by_id(id) {
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    action();
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_resize(canvas: HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let (width, height) = canvas_size(&window, &canvas);
            canvas.set_width(width);
            canvas.set_height(height);
            game.borrow_mut().resize(width, height);
            log::debug!("Resized to {}x{}", width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            let scoreboard = g.state.scoreboard;
            g.hud.update(&scoreboard);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use goal_kick::{QualityPreset, Settings};
    use goal_kick::hud::Hud;
    use goal_kick::scene::Scene;
    use goal_kick::sim::{MatchState, TickInput, tick};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Goal Kick (native) starting...");
    log::info!("Rendering needs a browser - run with `trunk serve`; playing a headless match");

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2024);
    let kicks: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(5);
    let settings = args
        .next()
        .and_then(|s| QualityPreset::from_str(&s))
        .map(Settings::from_preset)
        .unwrap_or_else(Settings::load);

    let scene = Scene::build(&settings);
    log::info!(
        "Scene has {} posts at {} quality",
        scene.posts.len(),
        settings.quality.as_str()
    );

    let mut state = MatchState::new(seed);
    let mut hud = Hud::new();
    let kick = TickInput {
        kick: true,
        ..Default::default()
    };
    let idle = TickInput::default();

    for _ in 0..kicks {
        tick(&mut state, &kick);
        while !state.both_resting() {
            tick(&mut state, &idle);
        }
        hud.update(&state.scoreboard);
    }

    println!(
        "\nAfter {} kicks over {} ticks (seed {}):",
        state.kicks, state.time_ticks, state.seed
    );
    println!("  player   {}", state.scoreboard.player);
    println!("  computer {}", state.scoreboard.computer);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
