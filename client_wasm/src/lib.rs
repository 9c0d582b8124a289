//! Browser client for the gamepad quiz
//!
//! Canvas2D rendering on top of the `game_core` simulation, driven by
//! `requestAnimationFrame` and the Gamepad API.

pub mod assets;
pub mod fsm;
pub mod input;
pub mod scene;

#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
mod web {
    use crate::fsm::{AppAction, AppFsm, AppState};
    use crate::input;
    use crate::renderer::Renderer;
    use crate::scene::{prompt_message, status_message, Scene};
    use game_core::{Config, FrameInput, GameState, PadQueue};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{GamepadEvent, HtmlCanvasElement};

    type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    /// Everything the frame loop owns
    struct App {
        state: GameState,
        renderer: Renderer,
        last_ts: Option<f64>,
    }

    thread_local! {
        static FSM: RefCell<AppFsm> = RefCell::new(AppFsm::new());
        static APP: RefCell<Option<App>> = const { RefCell::new(None) };
        static PENDING_PADS: RefCell<PadQueue> = RefCell::new(PadQueue::new());
    }

    #[wasm_bindgen(start)]
    pub fn wasm_start() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"logger already initialised".into());
        }
    }

    /// Load assets and start the game loop on `canvas`.
    ///
    /// `config_json` may override any field of the game configuration.
    #[wasm_bindgen]
    pub fn start_game(canvas: HtmlCanvasElement, config_json: Option<String>) -> js_sys::Promise {
        wasm_bindgen_futures::future_to_promise(async move {
            let config = parse_config(config_json.as_deref());
            let mut renderer = match Renderer::new(&canvas) {
                Ok(renderer) => renderer,
                Err(e) => return Err(load_failed(None, e)),
            };
            draw_status(&renderer);

            let assets = match crate::assets::load_assets().await {
                Ok(assets) => assets,
                Err(e) => return Err(load_failed(Some(&renderer), e)),
            };

            let config = match assets.player_size() {
                Some((w, h)) => config.with_player_size(w, h),
                None => config,
            }
            .with_explosion_frames(assets.explosion_frames.len() as u32);
            renderer.set_assets(assets);
            FSM.with(|fsm| fsm.borrow_mut().transition(AppAction::AssetsLoaded));

            let seed = seed();
            log::info!("starting game (seed {})", seed);
            let state = GameState::new(config, seed);

            listen_for_gamepads()?;
            APP.with(|app| {
                *app.borrow_mut() = Some(App {
                    state,
                    renderer,
                    last_ts: None,
                })
            });
            start_loop();
            Ok(JsValue::UNDEFINED)
        })
    }

    /// Current app state, e.g. `WaitingForGamepad`
    #[wasm_bindgen]
    pub fn app_state() -> String {
        FSM.with(|fsm| fsm.borrow().state_string())
    }

    fn load_failed(renderer: Option<&Renderer>, e: JsValue) -> JsValue {
        log::error!("failed to start: {:?}", e);
        FSM.with(|fsm| fsm.borrow_mut().transition(AppAction::LoadFailed));
        if let Some(renderer) = renderer {
            draw_status(renderer);
        }
        e
    }

    /// Full-screen message for states without a playfield
    fn draw_status(renderer: &Renderer) {
        let state = FSM.with(|fsm| fsm.borrow().state());
        if let Some(message) = status_message(state) {
            renderer.draw_message(message);
        }
    }

    fn parse_config(json: Option<&str>) -> Config {
        match json {
            Some(json) => serde_json::from_str(json).unwrap_or_else(|e| {
                log::warn!("ignoring invalid config: {}", e);
                Config::new()
            }),
            None => Config::new(),
        }
    }

    fn seed() -> u64 {
        let mut bytes = [0u8; 8];
        match getrandom::getrandom(&mut bytes) {
            Ok(()) => u64::from_le_bytes(bytes),
            Err(_) => js_sys::Date::now() as u64,
        }
    }

    fn listen_for_gamepads() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        for (name, connected) in [("gamepadconnected", true), ("gamepaddisconnected", false)] {
            let closure = Closure::wrap(Box::new(move |event: GamepadEvent| {
                if let Some(pad) = input::pad_event(&event, connected) {
                    log::info!("{}: {:?}", name, pad);
                    PENDING_PADS.with(|queue| queue.borrow_mut().push(pad));
                }
            }) as Box<dyn FnMut(GamepadEvent)>);
            window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn start_loop() {
        let f: FrameCallback = Rc::new(RefCell::new(None));
        let g = f.clone();
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            let keep_running = APP.with(|app| match app.borrow_mut().as_mut() {
                Some(app) => app.frame(ts),
                None => false,
            });
            if !keep_running {
                log::info!("game loop stopped");
                return;
            }
            if let (Some(w), Some(cb)) = (web_sys::window(), f.borrow().as_ref()) {
                let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }) as Box<dyn FnMut(f64)>));
        if let (Some(w), Some(cb)) = (web_sys::window(), g.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }

    impl App {
        /// One animation frame; returns false when there is no window to draw in
        fn frame(&mut self, ts: f64) -> bool {
            let dt = self
                .last_ts
                .map(|last| ((ts - last) / 1000.0) as f32)
                .unwrap_or(0.0);
            self.last_ts = Some(ts);

            PENDING_PADS.with(|queue| {
                self.state
                    .pad_queue
                    .events
                    .append(&mut queue.borrow_mut().events)
            });

            let Some(window) = web_sys::window() else {
                return false;
            };
            let frame_input = FrameInput {
                snapshots: input::poll_gamepads(&window.navigator()),
            };

            game_core::step(&mut self.state, &frame_input, dt);
            let pads_connected = !self.state.gamepads.is_empty();
            let app_state = FSM.with(|fsm| {
                let mut fsm = fsm.borrow_mut();
                fsm.apply_events(&self.state.events, pads_connected);
                fsm.state()
            });

            let mut scene = Scene::from_state(&self.state, app_state);
            if app_state == AppState::Playing {
                if let Some(snapshot) = self
                    .state
                    .gamepads
                    .primary()
                    .and_then(|index| frame_input.snapshot(index))
                {
                    scene = scene.with_status(input::describe(snapshot));
                }
            }
            if let Err(e) = self.renderer.draw(&scene) {
                log::warn!("draw failed: {:?}", e);
            }

            if self.state.events.prompt_ready {
                self.prompt(&window);
            }
            true
        }

        fn prompt(&mut self, window: &web_sys::Window) {
            let Some(outcome) = self.state.round.outcome() else {
                return;
            };
            let play_again = window
                .confirm_with_message(&prompt_message(outcome))
                .unwrap_or(true);
            log::info!(
                "round {} over ({:?}), play again: {}",
                self.state.round.number,
                outcome,
                play_again
            );

            game_core::acknowledge(&mut self.state, play_again);
            let pads_connected = !self.state.gamepads.is_empty();
            FSM.with(|fsm| fsm.borrow_mut().answer_prompt(play_again, pads_connected));
            // The next rAF timestamp includes the time spent in the dialog
            self.last_ts = None;
        }
    }

}

#[cfg(target_arch = "wasm32")]
pub use web::*;
