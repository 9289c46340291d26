//! Goalpost entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlImageElement, KeyboardEvent};

    use goalpost::Settings;
    use goalpost::audio::{AudioManager, SoundEffect};
    use goalpost::consts::{WORLD_HEIGHT, WORLD_WIDTH};
    use goalpost::effects::{FlashSchedule, reveal_delay};
    use goalpost::platform::Action;
    use goalpost::renderer::{Backdrop, RenderError, RenderState};
    use goalpost::sim::{GameEvent, GameState, StepOutcome, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        backdrop: Backdrop,
        input: TickInput,
        settings: Settings,
        audio: AudioManager,
        /// Form has been revealed; the loop stops
        finished: bool,
    }

    impl Game {
        fn new(settings: Settings) -> Self {
            let audio = AudioManager::new(settings.muted);
            Self {
                state: GameState::default(),
                render_state: None,
                backdrop: Backdrop::default(),
                input: TickInput::default(),
                settings,
                audio,
                finished: false,
            }
        }

        /// Run one simulation tick and hand back the requested effects
        fn update(&mut self) -> Vec<GameEvent> {
            let out = tick(&mut self.state, &self.input);
            if out.outcome != StepOutcome::Continue && self.settings.debug {
                match serde_json::to_string(&self.state) {
                    Ok(json) => log::debug!("{:?}: {}", out.outcome, json),
                    Err(e) => log::warn!("Snapshot failed: {}", e),
                }
            }
            out.events
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                render_state.set_backdrop(self.backdrop);
                match render_state.render(&self.state) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update overlay elements in DOM
        fn update_hud(&self, document: &Document) {
            if let Some(el) = document.get_element_by_id("instructions") {
                let visible = self.settings.show_instructions && self.state.is_running();
                let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
            }
        }
    }

    fn set_class(document: &Document, id: &str, class: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", class);
        }
    }

    /// Run `f` once after `delay_ms`. Timers are never cancelled.
    fn set_timeout(delay_ms: u32, f: impl FnOnce() + 'static) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(f);
        if window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms as i32,
            )
            .is_err()
        {
            log::warn!("setTimeout failed ({} ms)", delay_ms);
        }
        closure.forget();
    }

    async fn init_renderer(
        canvas: &HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> Result<RenderState, RenderError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(surface, &adapter, width, height).await
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Debug)
            .map_err(|e| JsValue::from_str(&format!("Failed to init logger: {e}")))?;

        let settings = Settings::load();
        if !settings.debug {
            log::set_max_level(log::LevelFilter::Info);
        }

        log::info!("Goalpost starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        // Fixed world aspect; scale the backing store for the display
        let dpr = window.device_pixel_ratio();
        let width = (WORLD_WIDTH as f64 * dpr) as u32;
        let height = (WORLD_HEIGHT as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let background = settings.background.clone();
        let game = Rc::new(RefCell::new(Game::new(settings)));

        match init_renderer(&canvas, width, height).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            // The page stays usable; the simulation just isn't drawn
            Err(e) => log::error!("Renderer unavailable: {}", e),
        }

        load_background(&canvas, background, game.clone());
        setup_input_handlers(game.clone())?;
        setup_start_button(&document, game.clone())?;

        set_class(&document, "loading", "hidden");

        request_animation_frame(game);

        log::info!("Goalpost ready");
        Ok(())
    }

    /// Try loading the background image; fall back to a solid fill if it can't load
    fn load_background(canvas: &HtmlCanvasElement, url: Option<String>, game: Rc<RefCell<Game>>) {
        let Some(url) = url else {
            game.borrow_mut().backdrop = Backdrop::from_load(None);
            return;
        };
        let image = match HtmlImageElement::new() {
            Ok(image) => image,
            Err(_) => {
                game.borrow_mut().backdrop = Backdrop::from_load(Some(false));
                return;
            }
        };

        let onload = {
            let game = game.clone();
            let canvas = canvas.clone();
            let url = url.clone();
            Closure::<dyn FnMut()>::new(move || {
                let style = canvas.style();
                let _ = style.set_property("background-image", &format!("url('{}')", url));
                let _ = style.set_property("background-size", "cover");
                game.borrow_mut().backdrop = Backdrop::from_load(Some(true));
                log::info!("Background image loaded");
            })
        };
        let onerror = Closure::<dyn FnMut()>::new(move || {
            game.borrow_mut().backdrop = Backdrop::from_load(Some(false));
        });

        image.set_onload(Some(onload.as_ref().unchecked_ref()));
        image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onload.forget();
        onerror.forget();
        image.set_src(&url);
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                let mut g = game.borrow_mut();
                if let Some(action) = Action::from_key(&key) {
                    event.prevent_default();
                    g.input.apply(action, true);
                } else if key == "Enter" {
                    start_game(&mut g);
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(action) = Action::from_key(&event.key()) {
                    game.borrow_mut().input.apply(action, false);
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn start_game(g: &mut Game) {
        g.state.start();
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            set_class(&document, "start-btn", "hidden");
        }
    }

    fn setup_start_button(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let Some(btn) = document.get_element_by_id("start-btn") else {
            log::warn!("No start button; press Enter to start");
            return Ok(());
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            start_game(&mut game.borrow_mut());
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Turn simulation events into sounds and timers
    fn handle_event(game: &Rc<RefCell<Game>>, event: &GameEvent) {
        {
            let g = game.borrow();
            if let Some(sound) = SoundEffect::for_event(event) {
                g.audio.play(sound);
            }
        }

        if let Some(schedule) = FlashSchedule::from_event(event) {
            if !game.borrow().settings.effective_flash() {
                return;
            }
            log::debug!("Hit flash for {} ms", schedule.duration_ms());
            for step in schedule.steps() {
                let game = game.clone();
                set_timeout(step.delay_ms, move || {
                    game.borrow_mut().state.player.rect.color = step.color;
                });
            }
        }

        if let Some(delay_ms) = reveal_delay(event) {
            let game = game.clone();
            set_timeout(delay_ms, move || reveal_form(&game));
        }
    }

    fn reveal_form(game: &Rc<RefCell<Game>>) {
        game.borrow_mut().finished = true;
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        set_class(&document, "game", "hidden");
        set_class(&document, "instructions", "hidden");
        set_class(&document, "signup-form", "");
        log::info!("Form revealed");
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let events = {
            let mut g = game.borrow_mut();
            if g.finished {
                return;
            }
            let events = g.update();
            g.render();
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                g.update_hud(&document);
            }
            events
        };

        for event in &events {
            handle_event(&game, event);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Goalpost (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted headless session through the same tick the browser uses
#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use goalpost::sim::{GameState, StepOutcome, scripted_input, tick};

    /// Give up after this many frames (~30 s at 60 Hz)
    const MAX_FRAMES: u32 = 1800;

    pub fn run() {
        let mut state = GameState::default();
        state.start();

        let mut outcome = StepOutcome::Continue;
        for _ in 0..MAX_FRAMES {
            let input = scripted_input(&state);
            let out = tick(&mut state, &input);
            if out.outcome == StepOutcome::HitHazard {
                log::info!("Frame {}: hit a hazard, back to spawn", state.frame);
            }
            if out.outcome == StepOutcome::ReachedGoal {
                outcome = out.outcome;
                break;
            }
        }

        match outcome {
            StepOutcome::ReachedGoal => log::info!(
                "Goal reached on frame {} with {} resets",
                state.frame,
                state.resets
            ),
            _ => log::warn!(
                "Gave up after {} frames ({} resets)",
                state.frame,
                state.resets
            ),
        }

        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize final state: {}", e),
        }
    }
}
