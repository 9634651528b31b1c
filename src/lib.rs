//! Leopard Run - a side-scrolling cat runner minigame
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, session state)
//! - `bestscore`: Single best-score scalar persisted to LocalStorage
//! - `web`: wasm-bindgen surface driven by the external canvas renderer
//!
//! The crate holds no rendering code. The host calls `advance_frame` once per
//! display frame and reads the public state back to draw the picture.

pub mod bestscore;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use bestscore::BestScore;

/// Game configuration constants
pub mod consts {
    /// Logical canvas size the simulation runs in (pixels)
    pub const VIEW_WIDTH: f32 = 960.0;
    pub const VIEW_HEIGHT: f32 = 540.0;

    /// Ground line (bottom anchor for the player and obstacles)
    pub const GROUND_Y: f32 = VIEW_HEIGHT * 0.82;

    /// Player defaults - horizontal position never scrolls
    pub const PLAYER_X: f32 = VIEW_WIDTH * 0.18;
    pub const PLAYER_WIDTH: f32 = 74.0;
    pub const PLAYER_HEIGHT: f32 = 46.0;

    /// Vertical physics (per tick / per tick squared)
    pub const GRAVITY: f32 = 0.65;
    pub const JUMP_IMPULSE: f32 = -14.8;

    /// Scroll speed curve: BASE + ticks / DIVISOR, capped at MAX
    pub const BASE_SPEED: f32 = 6.0;
    pub const MAX_SPEED: f32 = 14.0;
    pub const SPEED_DIVISOR: f32 = 600.0;

    /// Spawn cadence (ticks)
    pub const OBSTACLE_PERIOD: u64 = 85;
    pub const SPARK_PERIOD: u64 = 120;
    /// Probability a spark tick actually spawns one
    pub const SPARK_CHANCE: f64 = 0.75;
    /// Probability a new obstacle is the tall/narrow variant
    pub const TALL_CHANCE: f64 = 0.45;

    /// Obstacle variants (width, height)
    pub const TALL_OBSTACLE: (f32, f32) = (22.0, 96.0);
    pub const LOW_OBSTACLE: (f32, f32) = (34.0, 58.0);

    /// Spark geometry: radius and spawn band above the ground
    pub const SPARK_RADIUS: f32 = 10.0;
    pub const SPARK_MIN_LIFT: f32 = 120.0;
    pub const SPARK_LIFT_RANGE: f32 = 120.0;

    /// Entities enter this far past the right edge and retire this far past the left
    pub const SPAWN_MARGIN: f32 = 30.0;
    pub const DESPAWN_MARGIN: f32 = 50.0;
}
