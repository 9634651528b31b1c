//! Per-frame simulation tick
//!
//! One call advances the world by exactly one tick: difficulty, player
//! physics, spawning, then collision and scoring. The driver invokes this
//! once per rendered frame; outside the Running phase it does nothing, so
//! pause and idle freeze all motion.

use glam::Vec2;

use super::collision::{circle_rect_overlap, rects_overlap};
use super::state::{GameState, Obstacle, ObstacleKind, SessionPhase, Spark};
use crate::consts::*;
use rand::Rng;

/// Scroll speed after `ticks` elapsed ticks. Pure; capped at `MAX_SPEED`.
#[inline]
pub fn scroll_speed_for(ticks: u64) -> f32 {
    (BASE_SPEED + ticks as f32 / SPEED_DIVISOR).min(MAX_SPEED)
}

/// Advance the session by one tick.
///
/// The whole tick is synchronous and atomic: the renderer never observes
/// partial state. On fatal contact the run ends immediately and the rest of
/// the tick (remaining obstacles, all sparks) is skipped.
pub fn tick(state: &mut GameState) {
    if state.phase != SessionPhase::Running {
        return;
    }

    state.ticks += 1;
    state.speed = scroll_speed_for(state.ticks);

    // Vertical physics: integrate, then clamp to the ground
    let player = &mut state.player;
    player.vy += GRAVITY;
    player.y += player.vy;
    if player.y >= GROUND_Y {
        player.y = GROUND_Y;
        player.vy = 0.0;
        player.grounded = true;
    } else {
        player.grounded = false;
    }

    // Spawn cadence. Newly spawned entities scroll on this same tick.
    if state.ticks % OBSTACLE_PERIOD == 0 {
        spawn_obstacle(state);
    }
    if state.ticks % SPARK_PERIOD == 0 && state.rng.random_bool(SPARK_CHANCE) {
        spawn_spark(state);
    }

    let hitbox = state.player.hitbox();

    // Obstacles first: contact is fatal, so a spark in the same tick must not
    // award points. Reverse index order tolerates in-place removal.
    for i in (0..state.obstacles.len()).rev() {
        state.obstacles[i].pos.x -= state.speed;
        let obstacle = state.obstacles[i];

        if rects_overlap(&hitbox, &obstacle.rect()) {
            state.end_run();
            return;
        }

        if !obstacle.scored && obstacle.trailing_edge() < hitbox.pos.x {
            state.obstacles[i].scored = true;
            state.score += 1;
        }

        if obstacle.trailing_edge() < -DESPAWN_MARGIN {
            state.obstacles.remove(i);
        }
    }

    // Sparks: collected ones stay in the list (the renderer skips them) until
    // they drift off the left edge.
    for i in (0..state.sparks.len()).rev() {
        state.sparks[i].pos.x -= state.speed;
        let spark = state.sparks[i];

        if !spark.collected && circle_rect_overlap(spark.pos, spark.radius, &hitbox) {
            state.sparks[i].collected = true;
            state.score += 3;
        }

        if spark.pos.x < -DESPAWN_MARGIN {
            state.sparks.remove(i);
        }
    }
}

/// Append one obstacle just past the right edge, variant by weighted coin
fn spawn_obstacle(state: &mut GameState) {
    let kind = if state.rng.random_bool(TALL_CHANCE) {
        ObstacleKind::Tall
    } else {
        ObstacleKind::Low
    };
    let size = kind.size();
    state.obstacles.push(Obstacle {
        pos: Vec2::new(VIEW_WIDTH + SPAWN_MARGIN, GROUND_Y - size.y),
        size,
        kind,
        scored: false,
    });
}

/// Append one spark at a randomized height above the ground
fn spawn_spark(state: &mut GameState) {
    let lift = SPARK_MIN_LIFT + state.rng.random_range(0.0..SPARK_LIFT_RANGE);
    state.sparks.push(Spark {
        pos: Vec2::new(VIEW_WIDTH + SPAWN_MARGIN, GROUND_Y - lift),
        radius: SPARK_RADIUS,
        collected: false,
    });
}
