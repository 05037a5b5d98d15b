//! Square Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, HtmlInputElement};

    use square_dash::audio::MusicPlayer;
    use square_dash::consts::*;
    use square_dash::sim::{GamePhase, RenderFrame, Shape, TickInput};
    use square_dash::{Game, GameEvent, RunSummary, Settings, TickOutcome, Tuning};

    /// Host state shared between callbacks
    struct Host {
        game: Game,
        settings: Settings,
        music: MusicPlayer,
        ctx: CanvasRenderingContext2d,
        document: Document,
        accumulator: f64,
        last_time: f64,
        /// Jump key currently held
        jump_held: bool,
    }

    impl Host {
        fn new(seed: u64, ctx: CanvasRenderingContext2d, document: Document) -> Self {
            let settings = Settings::load();
            let mut music = MusicPlayer::default();
            music.apply_settings(&settings);
            let tuning = Tuning::load(
                document
                    .get_element_by_id("tuning")
                    .and_then(|el| el.text_content())
                    .as_deref(),
            );
            Self {
                game: Game::with_tuning(seed, tuning),
                settings,
                music,
                ctx,
                document,
                accumulator: 0.0,
                last_time: 0.0,
                jump_held: false,
            }
        }

        /// Read the color picker and start a run
        fn start(&mut self) {
            if let Some(input) = self
                .document
                .get_element_by_id("playerColor")
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            {
                self.settings.set_player_color(&input.value());
            }
            self.settings.save();

            let config = self.settings.run_config();
            self.game.start(&config);
            self.accumulator = 0.0;
            self.last_time = 0.0;
            self.dispatch_events();
        }

        /// Run simulation ticks for the elapsed real time
        fn update(&mut self, time: f64) {
            let step = 1.0 / HOST_TICK_HZ;
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0).min(0.25)
            } else {
                step
            };
            self.last_time = time;
            self.accumulator += dt;

            let input = TickInput {
                jump: self.jump_held,
            };
            let mut substeps = 0;
            while self.accumulator >= step && substeps < MAX_SUBSTEPS && self.game.is_running() {
                if let TickOutcome::RunEnded(summary) = self.game.tick(&input) {
                    log::info!("Run ended: {:?}", summary);
                }
                self.accumulator -= step;
                substeps += 1;
            }
            if !self.game.is_running() {
                self.accumulator = 0.0;
            }
            self.dispatch_events();
        }

        /// Forward run events to the music and the menu
        fn dispatch_events(&mut self) {
            for event in self.game.drain_events() {
                self.music.handle(&event);
                match event {
                    GameEvent::RunStarted => self.set_menu_visible(false),
                    GameEvent::RunEnded(summary) => {
                        self.set_menu_visible(true);
                        self.show_result(&summary);
                    }
                }
            }
        }

        fn set_menu_visible(&self, visible: bool) {
            let Some(menu) = self
                .document
                .get_element_by_id("setUp")
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                log::warn!("Setup menu element missing");
                return;
            };
            let display = if visible { "block" } else { "none" };
            let _ = menu.style().set_property("display", display);
        }

        fn show_result(&self, summary: &RunSummary) {
            if let Some(el) = self.document.get_element_by_id("result") {
                let text = if summary.new_high_score {
                    format!("New High Score: {}", summary.score)
                } else {
                    format!("Score: {}  High Score: {}", summary.score, summary.best_score)
                };
                el.set_text_content(Some(&text));
            }
        }

        /// Render the current frame
        fn render(&self) {
            let ctx = &self.ctx;
            ctx.clear_rect(0.0, 0.0, FIELD_WIDTH as f64, FIELD_HEIGHT as f64);
            let Some(frame) = self.game.frame() else { return };
            match frame.phase {
                GamePhase::Dead => draw_dead(ctx, &frame),
                _ => draw_world(ctx, &frame),
            }
        }
    }

    fn draw_world(ctx: &CanvasRenderingContext2d, frame: &RenderFrame<'_>) {
        let floor = FLOOR_Y as f64;
        ctx.set_fill_style_str(frame.floor_color);
        ctx.fill_rect(0.0, floor, FIELD_WIDTH as f64, FIELD_HEIGHT as f64 - floor);

        ctx.set_fill_style_str(frame.player_color);
        let p = frame.player;
        ctx.fill_rect(p.min.x as f64, p.min.y as f64, p.size.x as f64, p.size.y as f64);

        for obstacle in &frame.obstacles {
            ctx.set_fill_style_str(obstacle.color);
            match obstacle.shape {
                Shape::Rect { min, size } => {
                    ctx.fill_rect(min.x as f64, min.y as f64, size.x as f64, size.y as f64);
                }
                Shape::Triangle { points } => {
                    ctx.begin_path();
                    ctx.move_to(points[0].x as f64, points[0].y as f64);
                    ctx.line_to(points[1].x as f64, points[1].y as f64);
                    ctx.line_to(points[2].x as f64, points[2].y as f64);
                    ctx.close_path();
                    ctx.fill();
                }
                Shape::Circle { center, radius } => {
                    ctx.begin_path();
                    let _ = ctx.arc(
                        center.x as f64,
                        center.y as f64,
                        radius as f64,
                        0.0,
                        std::f64::consts::TAU,
                    );
                    ctx.fill();
                }
            }
        }

        ctx.set_fill_style_str("white");
        ctx.set_font("15px sans-serif");
        let _ = ctx.fill_text(&format!("Score: {}", frame.score), 510.0, 25.0);
    }

    fn draw_dead(ctx: &CanvasRenderingContext2d, frame: &RenderFrame<'_>) {
        ctx.set_fill_style_str("crimson");
        ctx.set_font("50px sans-serif");
        let _ = ctx.fill_text("You Are Dead", 150.0, 250.0);
        ctx.set_font("15px sans-serif");
        let _ = ctx.fill_text("Click 'START!' to play a new game!", 185.0, 300.0);
        let _ = ctx.fill_text("Press the 'UP' arrow to jump!", 195.0, 325.0);
        let _ = ctx.fill_text(&format!("Score: {}", frame.score), 350.0, 50.0);
        let _ = ctx.fill_text(&format!("High Score: {}", frame.best_score), 350.0, 80.0);
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Square Dash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(FIELD_WIDTH as u32);
        canvas.set_height(FIELD_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let host = Rc::new(RefCell::new(Host::new(seed, ctx, document)));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(host.clone());
        setup_menu(host.clone());

        request_animation_frame(host);

        log::info!("Square Dash running!");
    }

    fn setup_input_handlers(host: Rc<RefCell<Host>>) {
        let window = web_sys::window().unwrap();

        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if event.key() == "ArrowUp" {
                    event.prevent_default();
                    host.borrow_mut().jump_held = true;
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            if event.key() == "ArrowUp" {
                host.borrow_mut().jump_held = false;
            }
        });
        let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Start and difficulty buttons
    fn setup_menu(host: Rc<RefCell<Host>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        for name in ["easy", "medium", "hard"] {
            let Some(btn) = document.get_element_by_id(name) else {
                log::warn!("Difficulty button '{}' missing", name);
                continue;
            };
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut h = host.borrow_mut();
                if let Some(difficulty) = h.settings.select_difficulty(name) {
                    log::info!("Difficulty: {}", difficulty.as_str());
                    h.settings.save();
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("start") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                host.borrow_mut().start();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("Start button missing");
        }
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(host, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(host: Rc<RefCell<Host>>, time: f64) {
        {
            let mut h = host.borrow_mut();
            h.update(time);
            h.render();
        }

        request_animation_frame(host);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Square Dash (native) starting...");
    log::info!("Native mode has no renderer - run with `trunk serve` for the web version");

    let mut args = std::env::args().skip(1);
    let runs: u32 = args.next().and_then(|a| a.parse().ok()).unwrap_or(5);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(2024);
    let overrides = args.next().and_then(|path| match std::fs::read_to_string(&path) {
        Ok(json) => Some(json),
        Err(e) => {
            log::warn!("Cannot read tuning file {}: {}", path, e);
            None
        }
    });
    let tuning = square_dash::Tuning::load(overrides.as_deref());

    println!("\nPlaying {} autopilot runs (seed {})...", runs, seed);
    headless::play(runs, seed, tuning);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use square_dash::sim::{GameState, TickInput};
    use square_dash::{Difficulty, Game, GameEvent, Settings, TickOutcome, Tuning};

    /// Runs are cut off here even if the autopilot never dies
    const MAX_TICKS: u64 = 25 * 60 * 5;

    /// Jump when an obstacle is about to reach the player
    fn autopilot(run: &GameState) -> TickInput {
        let player = run.player.bounding_box();
        let front = player.max().x;
        let jump = run.obstacles.iter().any(|o| {
            let gap = o.pos.x - front;
            gap >= 0.0 && gap <= o.speed * 4.0
        });
        TickInput { jump }
    }

    pub fn play(runs: u32, seed: u64, tuning: Tuning) {
        let mut game = Game::with_tuning(seed, tuning);
        let mut settings = Settings::default();
        let presets = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

        for i in 0..runs {
            let preset = presets[i as usize % presets.len()];
            settings.difficulty = Some(preset);
            game.start(&settings.run_config());

            let mut ticks = 0;
            while ticks < MAX_TICKS {
                let Some(run) = game.run() else { break };
                let input = autopilot(run);
                if !matches!(game.tick(&input), TickOutcome::Frame(_)) {
                    break;
                }
                ticks += 1;
            }

            for event in game.drain_events() {
                match event {
                    GameEvent::RunStarted => log::debug!("Run {} started", i + 1),
                    GameEvent::RunEnded(summary) => println!(
                        "Run {} ({}): score {}{}",
                        i + 1,
                        preset.as_str(),
                        summary.score,
                        if summary.new_high_score { " - new high score!" } else { "" }
                    ),
                }
            }
            if game.is_running() {
                // A live run can only end by collision, so no further runs can start
                println!("Run {} ({}): survived the {}-tick limit", i + 1, preset.as_str(), MAX_TICKS);
                break;
            }
        }

        println!("Best score: {}", game.best_score());
    }
}
