//! Session state and core simulation types
//!
//! The whole mutable game state lives in [`GameState`]: one writer (the tick
//! routine plus the command methods below), and the renderer reads it only
//! between completed ticks.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// End-of-run messages, shown by the renderer when a session ends
pub const QUOTES: [&str; 5] = [
    "Se non trovi il senso, almeno scegli una direzione.",
    "Non devi vincere tutto: devi diventare più vero.",
    "La vita accelera. Tu prova a restare presente.",
    "Ogni salto è una decisione: paura o possibilità?",
    "Realizzarsi è restare fedeli a ciò che senti.",
];

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No run started yet
    Idle,
    /// Active gameplay, ticks advance the world
    Running,
    /// Frozen mid-run
    Paused,
    /// Run ended on fatal contact
    Ended,
}

/// The cat avatar. Horizontal position is fixed; only vertical motion exists.
///
/// `y` is the bottom anchor (feet), which equals `GROUND_Y` while grounded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub vy: f32,
    pub grounded: bool,
    pub width: f32,
    pub height: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: PLAYER_X,
            y: GROUND_Y,
            vy: 0.0,
            grounded: true,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
        }
    }
}

impl Player {
    /// Collision rectangle, inset from the drawn size so near misses feel fair
    pub fn hitbox(&self) -> Rect {
        Rect::new(
            self.x - self.width * 0.48,
            (self.y - self.height) + 6.0,
            self.width * 0.9,
            self.height * 0.78,
        )
    }
}

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Wide and low, jumped over comfortably
    Low,
    /// Narrow and tall, needs a well-timed jump
    Tall,
}

impl ObstacleKind {
    /// (width, height) of the variant
    pub fn size(&self) -> Vec2 {
        let (w, h) = match self {
            ObstacleKind::Tall => TALL_OBSTACLE,
            ObstacleKind::Low => LOW_OBSTACLE,
        };
        Vec2::new(w, h)
    }
}

/// A fatal-on-contact entity, scrolling right to left
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: ObstacleKind,
    /// Set once the player has cleared it and the point was awarded
    pub scored: bool,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    pub fn trailing_edge(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

/// A score-granting collectible (non-fatal)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Spark {
    /// Center
    pub pos: Vec2,
    pub radius: f32,
    pub collected: bool,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: SessionPhase,
    /// Simulation tick counter for the current run
    pub ticks: u64,
    /// Current scroll speed (px per tick), non-decreasing within a run
    pub speed: f32,
    pub score: u32,
    /// Best score across sessions; persisted by the host on new records
    pub best: u32,
    pub player: Player,
    /// Spawn order, oldest first
    pub obstacles: Vec<Obstacle>,
    pub sparks: Vec<Spark>,
    /// Quote chosen when the run ended
    pub end_quote: Option<&'static str>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new idle session with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: SessionPhase::Idle,
            ticks: 0,
            speed: BASE_SPEED,
            score: 0,
            best: 0,
            player: Player::default(),
            obstacles: Vec::new(),
            sparks: Vec::new(),
            end_quote: None,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Start (or restart) a run: reset all mutable run state, go to Running.
    ///
    /// Valid from any phase; `best` and the RNG stream carry over.
    pub fn start(&mut self) {
        self.ticks = 0;
        self.speed = BASE_SPEED;
        self.score = 0;
        self.player = Player::default();
        self.obstacles.clear();
        self.sparks.clear();
        self.end_quote = None;
        self.phase = SessionPhase::Running;
        log::info!("run started (seed {})", self.seed);
    }

    /// Toggle between Running and Paused. No-op from Idle or Ended.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            SessionPhase::Running => SessionPhase::Paused,
            SessionPhase::Paused => SessionPhase::Running,
            other => other,
        };
    }

    /// Jump command. Accepted only while running, unpaused, and grounded;
    /// anything else is a silent no-op.
    pub fn jump(&mut self) {
        if self.phase == SessionPhase::Running && self.player.grounded {
            self.player.vy = JUMP_IMPULSE;
            self.player.grounded = false;
        }
    }

    /// End the run on fatal contact: record a new best if earned and pick the
    /// display quote. Invoked solely by the collision pass in `tick`.
    pub(crate) fn end_run(&mut self) {
        self.phase = SessionPhase::Ended;
        if self.score > self.best {
            self.best = self.score;
            log::info!("new best score: {}", self.best);
        }
        self.end_quote = Some(QUOTES[self.rng.random_range(0..QUOTES.len())]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle_and_grounded() {
        let state = GameState::new(7);
        assert_eq!(state.phase, SessionPhase::Idle);
        assert!(state.player.grounded);
        assert_eq!(state.player.y, GROUND_Y);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty() && state.sparks.is_empty());
    }

    #[test]
    fn test_toggle_pause_noop_from_idle_and_ended() {
        let mut state = GameState::new(7);
        state.toggle_pause();
        assert_eq!(state.phase, SessionPhase::Idle);

        state.phase = SessionPhase::Ended;
        state.toggle_pause();
        assert_eq!(state.phase, SessionPhase::Ended);
    }

    #[test]
    fn test_jump_noop_unless_running_and_grounded() {
        let mut state = GameState::new(7);
        // Idle: no-op
        state.jump();
        assert_eq!(state.player.vy, 0.0);

        state.start();
        state.jump();
        assert_eq!(state.player.vy, JUMP_IMPULSE);
        assert!(!state.player.grounded);

        // Mid-air jump: velocity unchanged
        state.player.vy = -3.0;
        state.jump();
        assert_eq!(state.player.vy, -3.0);
    }

    #[test]
    fn test_end_run_updates_best_and_picks_quote() {
        let mut state = GameState::new(7);
        state.start();
        state.score = 12;
        state.best = 5;
        state.end_run();
        assert_eq!(state.phase, SessionPhase::Ended);
        assert_eq!(state.best, 12);
        assert!(QUOTES.contains(&state.end_quote.unwrap()));

        // A lower score leaves best alone
        state.start();
        state.score = 3;
        state.end_run();
        assert_eq!(state.best, 12);
    }

    #[test]
    fn test_start_resets_run_state_but_keeps_best() {
        let mut state = GameState::new(7);
        state.start();
        state.score = 9;
        state.ticks = 400;
        state.speed = 10.0;
        state.end_run();

        state.start();
        assert_eq!(state.phase, SessionPhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.ticks, 0);
        assert_eq!(state.speed, BASE_SPEED);
        assert_eq!(state.best, 9);
        assert!(state.end_quote.is_none());
    }

    #[test]
    fn test_hitbox_insets() {
        let player = Player::default();
        let hb = player.hitbox();
        assert!((hb.size.x - PLAYER_WIDTH * 0.9).abs() < f32::EPSILON);
        assert!((hb.size.y - PLAYER_HEIGHT * 0.78).abs() < f32::EPSILON);
        assert!((hb.pos.x - (PLAYER_X - PLAYER_WIDTH * 0.48)).abs() < f32::EPSILON);
        assert!((hb.pos.y - ((GROUND_Y - PLAYER_HEIGHT) + 6.0)).abs() < f32::EPSILON);
    }
}
