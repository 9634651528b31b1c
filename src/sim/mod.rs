//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One simulation tick per driver invocation
//! - Seeded RNG only
//! - Stable iteration order (spawn order, traversed back to front)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_rect_overlap, rects_overlap};
pub use state::{GameState, Obstacle, ObstacleKind, Player, SessionPhase, Spark, QUOTES};
pub use tick::{scroll_speed_for, tick};
