//! Lava Climb entry point
//!
//! Native headless driver: runs the fixed-timestep loop against a scripted
//! autopilot, logs sound cues and prints the final HUD as JSON.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::Path;

    use glam::Vec2;
    use lava_climb::Tuning;
    use lava_climb::consts::*;
    use lava_climb::platform::{ControlLayout, DeviceEvent, InputMapper, InputState};
    use lava_climb::sim::{GameEvent, GamePhase, GameState, tick};

    const SCREEN_WIDTH: f32 = 800.0;
    const SCREEN_HEIGHT: f32 = 600.0;
    const FRAME_DT: f32 = 1.0 / 60.0;
    /// Simulated run length in frames
    const FRAMES: u32 = 60 * 90;
    /// Runs to play before stopping
    const MAX_RUNS: u32 = 3;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        mapper: InputMapper,
        input: InputState,
        accumulator: f32,
        runs: u32,
    }

    impl Game {
        fn new(seed: u64, tuning: Tuning) -> Self {
            let screen = Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT);
            Self {
                state: GameState::new(seed, screen.x, screen.y, tuning),
                mapper: InputMapper::new(ControlLayout::new(screen)),
                input: InputState::default(),
                accumulator: 0.0,
                runs: 1,
            }
        }

        fn feed(&mut self, event: DeviceEvent) {
            for logical in self.mapper.map(&event) {
                self.input.apply(logical);
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(MAX_FRAME_DT);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.input.tick_input();
                tick(&mut self.state, &input, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input.consume_one_shots();
                self.handle_events();
            }
        }

        fn handle_events(&mut self) {
            for event in self.state.drain_events() {
                if let Some(cue) = event.cue() {
                    log::info!("cue: {}", cue);
                }
                match event {
                    GameEvent::SessionStarted => {
                        // Held buttons from the last run do not carry over
                        for logical in self.mapper.release_all() {
                            self.input.apply(logical);
                        }
                    }
                    GameEvent::Dead { final_score, shake } => {
                        log::info!("Run {} over: score {} (shake {})", self.runs, final_score, shake);
                    }
                    _ => log::trace!("{:?}", event),
                }
            }
        }

        /// Scripted player: walk and hop, flip direction now and then,
        /// restart by tapping the screen after a game over.
        fn autopilot(&mut self, frame: u32) {
            if self.state.phase() == GamePhase::GameOver {
                if self.runs < MAX_RUNS && frame % 60 == 0 {
                    self.runs += 1;
                    let center = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
                    self.feed(DeviceEvent::PointerDown { id: 0, pos: center });
                    self.feed(DeviceEvent::PointerUp { id: 0 });
                }
                return;
            }

            let key = |code: &str| code.to_string();
            match frame % 240 {
                0 => self.feed(DeviceEvent::KeyDown { code: key("ArrowRight"), repeat: false }),
                120 => {
                    self.feed(DeviceEvent::KeyUp { code: key("ArrowRight") });
                    self.feed(DeviceEvent::KeyDown { code: key("KeyA"), repeat: false });
                }
                239 => self.feed(DeviceEvent::KeyUp { code: key("KeyA") }),
                _ => {}
            }
            match frame % 45 {
                0 => self.feed(DeviceEvent::KeyDown { code: key("Space"), repeat: false }),
                // Held key repeats must not jump again
                10 => self.feed(DeviceEvent::KeyDown { code: key("Space"), repeat: true }),
                20 => self.feed(DeviceEvent::KeyUp { code: key("Space") }),
                _ => {}
            }
            if frame % 45 == 15 {
                self.feed(DeviceEvent::KeyDown { code: key("ArrowUp"), repeat: false });
                self.feed(DeviceEvent::KeyUp { code: key("ArrowUp") });
            }
        }
    }

    pub fn run() {
        env_logger::init();
        log::info!("Lava Climb (headless) starting...");

        let mut args = std::env::args().skip(1);
        let tuning = match args.next() {
            Some(path) => Tuning::load(Path::new(&path)),
            None => Tuning::default(),
        };
        let seed = match args.next().map(|s| s.parse::<u64>()) {
            Some(Ok(seed)) => seed,
            Some(Err(e)) => {
                log::warn!("Invalid seed ({}), using a random one", e);
                rand::random()
            }
            None => rand::random(),
        };
        log::info!("Seed {}", seed);

        let mut game = Game::new(seed, tuning);
        game.handle_events();

        for frame in 0..FRAMES {
            game.autopilot(frame);
            // Simulate an occasional hitch; the clamp keeps it bounded
            let dt = if frame % 600 == 599 { 0.25 } else { FRAME_DT };
            game.update(dt);
        }

        match serde_json::to_string(&game.state.hud()) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize HUD: {}", e),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The core is embedded by a host page; there is no wasm binary entry point
}
