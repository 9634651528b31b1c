//! wasm-bindgen surface for the browser host
//!
//! The JS side owns input handling and canvas drawing; this wrapper owns the
//! session. The host calls [`Game::advance_frame`] once per
//! `requestAnimationFrame` callback and reads state back between ticks.

use wasm_bindgen::prelude::*;

use crate::bestscore::BestScore;
use crate::sim::{GameState, SessionPhase, tick};

#[wasm_bindgen(start)]
pub fn wasm_init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Leopard Run core loaded");
}

/// Game instance exported to the JS renderer
#[wasm_bindgen]
pub struct Game {
    state: GameState,
    best_store: BestScore,
    // Track phase so the Ended transition persists the best score once
    last_phase: SessionPhase,
}

#[wasm_bindgen]
impl Game {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Game {
        let seed = js_sys::Date::now() as u64;
        let best_store = BestScore::load();
        let mut state = GameState::new(seed);
        state.best = best_store.value;
        log::info!("Game initialized with seed: {}", seed);
        Game {
            state,
            best_store,
            last_phase: SessionPhase::Idle,
        }
    }

    /// Advance exactly one simulation tick. Call once per animation frame.
    pub fn advance_frame(&mut self) {
        tick(&mut self.state);

        let phase = self.state.phase;
        if phase != self.last_phase {
            if phase == SessionPhase::Ended {
                self.best_store.record(self.state.score);
            }
            self.last_phase = phase;
        }
    }

    /// Start or restart a run
    pub fn start(&mut self) {
        self.state.start();
        self.last_phase = self.state.phase;
    }

    /// Jump command (key press / pointer press)
    pub fn jump(&mut self) {
        self.state.jump();
    }

    /// Toggle between running and paused
    pub fn toggle_pause(&mut self) {
        self.state.toggle_pause();
        self.last_phase = self.state.phase;
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn best(&self) -> u32 {
        self.state.best
    }

    pub fn speed(&self) -> f32 {
        self.state.speed
    }

    pub fn ticks(&self) -> u64 {
        self.state.ticks
    }

    pub fn phase(&self) -> String {
        match self.state.phase {
            SessionPhase::Idle => "idle",
            SessionPhase::Running => "running",
            SessionPhase::Paused => "paused",
            SessionPhase::Ended => "ended",
        }
        .to_string()
    }

    /// Quote to display after a run ended, if any
    pub fn end_quote(&self) -> Option<String> {
        self.state.end_quote.map(str::to_string)
    }

    /// Player pose as JSON for the renderer
    pub fn player_json(&self) -> String {
        serde_json::to_string(&self.state.player).unwrap_or_default()
    }

    /// Live obstacle list as JSON, in spawn order
    pub fn obstacles_json(&self) -> String {
        serde_json::to_string(&self.state.obstacles).unwrap_or_default()
    }

    /// Live spark list as JSON, in spawn order
    pub fn sparks_json(&self) -> String {
        serde_json::to_string(&self.state.sparks).unwrap_or_default()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
